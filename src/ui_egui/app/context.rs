use crate::models::settings::WidgetConfig;
use crate::utils::monitors::{self, MonitorRect};

/// Everything the controller is handed at startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: WidgetConfig,
    /// Primary work area reported by the platform, when it can be queried
    /// before the window exists.
    platform_work_area: Option<MonitorRect>,
}

impl AppContext {
    pub fn new(config: WidgetConfig, platform_work_area: Option<MonitorRect>) -> Self {
        Self {
            config,
            platform_work_area,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Whether the initial position is already final, or has to wait for
    /// egui to report the monitor size.
    pub fn placement_known(&self) -> bool {
        self.platform_work_area.is_some()
    }

    /// Initial window position on the best work area known so far.
    pub fn initial_position(&self, egui_monitor_size: Option<(f32, f32)>) -> egui::Pos2 {
        let area = monitors::work_area_or_fallback(self.platform_work_area, egui_monitor_size);
        let (x, y) = monitors::initial_position(
            &area,
            self.config.position_x_fraction,
            self.config.position_y_fraction,
        );
        egui::pos2(x, y)
    }
}
