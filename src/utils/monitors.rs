//! Primary monitor work area lookup for the initial window placement.
//!
//! On Windows, uses the Win32 `EnumDisplayMonitors` / `GetMonitorInfoW` APIs
//! and picks the monitor flagged as primary. Its work area is scaled by the
//! monitor DPI into the logical points egui positions windows in.
//!
//! On other platforms no work area is known up front; the caller falls back
//! to the monitor size egui reports once the window exists (or 1920×1080).

/// A rectangle representing a monitor's working area (excludes taskbar, etc.).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl MonitorRect {
    pub const FALLBACK: MonitorRect = MonitorRect {
        x: 0.0,
        y: 0.0,
        width: 1920.0,
        height: 1080.0,
    };

    /// Convert a rectangle in physical pixels (as Win32 reports it to a
    /// DPI-aware process) into egui points.
    pub fn from_physical(left: i32, top: i32, right: i32, bottom: i32, scale_factor: f32) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        MonitorRect {
            x: left as f32 / scale,
            y: top as f32 / scale,
            width: (right - left) as f32 / scale,
            height: (bottom - top) as f32 / scale,
        }
    }

    /// Point at the given fractions of this rectangle's width and height,
    /// measured from its top-left corner.
    pub fn point_at(&self, x_fraction: f32, y_fraction: f32) -> (f32, f32) {
        (
            self.x + self.width * x_fraction,
            self.y + self.height * y_fraction,
        )
    }
}

// ── Windows implementation ──────────────────────────────────────────────────

#[cfg(target_os = "windows")]
mod platform {
    use super::MonitorRect;

    use windows::Win32::Foundation::{BOOL, LPARAM, RECT};
    use windows::Win32::Graphics::Gdi::{
        EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
    };
    use windows::Win32::UI::HiDpi::{GetDpiForMonitor, MDT_EFFECTIVE_DPI};

    const MONITORINFOF_PRIMARY: u32 = 1;
    const BASE_DPI: f32 = 96.0;

    /// Work area of the primary monitor, if Win32 reports one.
    pub fn primary_work_area() -> Option<MonitorRect> {
        let mut primary: Option<MonitorRect> = None;

        unsafe {
            let primary_ptr = &mut primary as *mut Option<MonitorRect> as isize;
            let _ = EnumDisplayMonitors(
                HDC::default(),
                None,
                Some(monitor_enum_proc),
                LPARAM(primary_ptr),
            );
        }

        if primary.is_none() {
            log::warn!("Win32 EnumDisplayMonitors reported no primary monitor");
        }

        primary
    }

    /// Callback invoked once per monitor by `EnumDisplayMonitors`.
    unsafe extern "system" fn monitor_enum_proc(
        hmonitor: HMONITOR,
        _hdc: HDC,
        _rect: *mut RECT,
        lparam: LPARAM,
    ) -> BOOL {
        let primary = &mut *(lparam.0 as *mut Option<MonitorRect>);

        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };

        if GetMonitorInfoW(hmonitor, &mut info).as_bool()
            && info.dwFlags & MONITORINFOF_PRIMARY != 0
        {
            // Use rcWork (excludes taskbar) rather than rcMonitor (full area)
            let work = info.rcWork;
            let scale = monitor_scale_factor(hmonitor);
            *primary = Some(MonitorRect::from_physical(
                work.left,
                work.top,
                work.right,
                work.bottom,
                scale,
            ));
            return BOOL(0); // found it, stop enumerating
        }

        BOOL(1) // continue enumeration
    }

    /// Effective DPI of the monitor relative to 96; 1.0 if it cannot be read.
    unsafe fn monitor_scale_factor(hmonitor: HMONITOR) -> f32 {
        let mut dpi_x = 0u32;
        let mut dpi_y = 0u32;
        match GetDpiForMonitor(hmonitor, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y) {
            Ok(()) if dpi_x > 0 => dpi_x as f32 / BASE_DPI,
            Ok(()) => 1.0,
            Err(err) => {
                log::warn!("GetDpiForMonitor failed ({}), assuming 100% scaling", err);
                1.0
            }
        }
    }
}

// ── Non-Windows fallback ────────────────────────────────────────────────────

#[cfg(not(target_os = "windows"))]
mod platform {
    use super::MonitorRect;

    /// Without a windowing handle there is no portable way to query the work
    /// area, so the caller waits for egui's `monitor_size` instead.
    pub fn primary_work_area() -> Option<MonitorRect> {
        None
    }
}

pub use platform::primary_work_area;

/// Work area to place against: the platform answer if there is one, else a
/// rectangle at the origin sized from egui's `monitor_size`, else 1920×1080.
pub fn work_area_or_fallback(
    platform_area: Option<MonitorRect>,
    egui_monitor_size: Option<(f32, f32)>,
) -> MonitorRect {
    platform_area.unwrap_or_else(|| match egui_monitor_size {
        Some((width, height)) if width > 0.0 && height > 0.0 => MonitorRect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        },
        _ => MonitorRect::FALLBACK,
    })
}

/// Top-left corner for the widget on `work_area`.
pub fn initial_position(work_area: &MonitorRect, x_fraction: f32, y_fraction: f32) -> (f32, f32) {
    let (x, y) = work_area.point_at(x_fraction, y_fraction);
    (x.floor(), y.floor())
}
