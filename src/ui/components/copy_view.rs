use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

/// Render the answer as bare text. No borders, colors, or key hints, so a
/// terminal selection contains only the answer itself. Esc/c leaves.
pub fn render_copy_view(frame: &mut Frame, app: &App, area: Rect) {
    let text = app
        .answer
        .as_ref()
        .map(|answer| answer.text.as_str())
        .unwrap_or_default();

    let paragraph = Paragraph::new(text)
        .scroll((app.scroll_offset, 0))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
