//! Container styles: how the bar and the content share an area.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::tui::component::Component;

/// What a container style gets to arrange. `bar` is `None` when the content
/// asked for the bar to be hidden.
pub struct ContainerConfiguration<'a> {
    pub bar: Option<&'a mut dyn Component>,
    pub content: &'a mut dyn Component,
}

/// Where things ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerLayout {
    pub bar: Option<Rect>,
    pub content: Rect,
}

pub trait NavigationContainerStyle {
    /// Render `configuration` into `area` and report the layout used.
    fn make_body(
        &self,
        configuration: ContainerConfiguration<'_>,
        frame: &mut Frame,
        area: Rect,
    ) -> ContainerLayout;
}

fn bar_height(bar: &dyn Component, area: Rect) -> u16 {
    bar.desired_height().unwrap_or(1).min(area.height)
}

/// Bar on top, content fills what is left.
///
/// ```text
/// ┌──────────────┐
/// │     bar      │
/// ├──────────────┤
/// │   content    │
/// └──────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StackedContainerStyle;

impl NavigationContainerStyle for StackedContainerStyle {
    fn make_body(
        &self,
        configuration: ContainerConfiguration<'_>,
        frame: &mut Frame,
        area: Rect,
    ) -> ContainerLayout {
        let ContainerConfiguration { bar, content } = configuration;
        let Some(bar) = bar else {
            content.render(frame, area);
            return ContainerLayout { bar: None, content: area };
        };

        let [bar_area, content_area] =
            Layout::vertical([Constraint::Length(bar_height(bar, area)), Constraint::Fill(1)])
                .areas(area);
        bar.render(frame, bar_area);
        content.render(frame, content_area);
        ContainerLayout {
            bar: Some(bar_area),
            content: content_area,
        }
    }
}

/// Content fills the whole area; the bar is drawn over its top rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayContainerStyle;

impl NavigationContainerStyle for OverlayContainerStyle {
    fn make_body(
        &self,
        configuration: ContainerConfiguration<'_>,
        frame: &mut Frame,
        area: Rect,
    ) -> ContainerLayout {
        let ContainerConfiguration { bar, content } = configuration;
        content.render(frame, area);

        let bar_area = bar.map(|bar| {
            let bar_area = Rect {
                height: bar_height(bar, area),
                ..area
            };
            bar.render(frame, bar_area);
            bar_area
        });
        ContainerLayout {
            bar: bar_area,
            content: area,
        }
    }
}
