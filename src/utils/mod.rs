pub mod monitors;
