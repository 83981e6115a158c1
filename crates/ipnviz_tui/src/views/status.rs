use ipnviz_core::stats::SceneStats;
use ipnviz_data::{format_time, Point3};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};

/// Two-line status bar under the scene.
pub struct StatusWidget<'a> {
    pub stats: &'a SceneStats,
    /// Camera position in simulation units.
    pub camera: Point3,
    pub paused: bool,
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let time = if self.stats.ticks == 0 {
            "-".to_string()
        } else {
            format_time(self.stats.time, Some(3))
        };
        let (state, color) = if self.stats.final_tick {
            ("FINAL", Color::Magenta)
        } else if self.paused {
            ("PAUSED", Color::Yellow)
        } else {
            ("LIVE", Color::Green)
        };

        Paragraph::new(format!(
            " {} | Time: {} | Tick: {} | Links: {}/{} | Splashes: {} | FPS: {:.0}",
            state,
            time,
            self.stats.ticks,
            self.stats.visible_connections,
            self.stats.connections,
            self.stats.active_splashes,
            self.stats.fps
        ))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .render(lines[0], buf);

        Paragraph::new(format!(
            " Camera: ({:.3e}, {:.3e}, {:.3e}) | Nodes: {} | Bodies: {} | [q] quit [space] pause [arrows] orbit [+/-] zoom [l] labels [n] step",
            self.camera.x,
            self.camera.y,
            self.camera.z,
            self.stats.nodes,
            self.stats.bodies
        ))
        .style(Style::default().fg(Color::DarkGray))
        .render(lines[1], buf);
    }
}
