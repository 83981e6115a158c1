use ipnviz_tui::views::{SceneWidget, StatusWidget};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::state::App;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Scene
                Constraint::Length(2), // Status
            ])
            .split(f.area());

        let now = self.elapsed();
        let draw_list = self
            .driver
            .frame(now, SceneWidget::viewport_for(layout[0]));
        f.render_widget(
            SceneWidget::new(&draw_list)
                .title(" IPN Scene ")
                .show_labels(self.show_labels),
            layout[0],
        );

        let stats = self.driver.stats();
        f.render_widget(
            StatusWidget {
                stats: &stats,
                camera: self.driver.camera_position(),
                paused: self.paused,
            },
            layout[1],
        );
    }
}
