use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DestinationPane, LinkPane, RootList, StatusBar, TitleBar};

/// `[title, main, status]`
pub fn layout(frame_area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, main_area, status_area] = layout(frame.area());
    let screen = app.active_screen();

    TitleBar::new(app.breadcrumbs()).render(frame, title_area);

    match &screen {
        Screen::Root => RootList::new(&mut tui.root_list).render(frame, main_area),
        Screen::Link(link) => LinkPane { link: *link }.render(frame, main_area),
        Screen::Destination(view) => DestinationPane {
            view,
            true_color: tui.true_color,
        }
        .render(frame, main_area),
    }

    StatusBar {
        screen: &screen,
        status_message: &app.status_message,
    }
    .render(frame, status_area);
}

/// Hit test: which breadcrumb (if any) is at the given screen position.
/// The crumb index is also the path depth it stands for.
pub fn hit_test_breadcrumb(column: u16, row: u16, frame_area: Rect, app: &App) -> Option<usize> {
    let [title_area, _, _] = layout(frame_area);
    if row != title_area.y || column < title_area.x {
        return None;
    }
    TitleBar::new(app.breadcrumbs()).crumb_at(column - title_area.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::listing::INTRO_LINK;
    use crate::test_support::{screen_text, test_app, test_terminal};

    #[test]
    fn test_draw_root() {
        let app = test_app();
        let mut tui = TuiState::new(&app, true);
        let mut terminal = test_terminal();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        let first_line = text.lines().next().unwrap();
        assert!(first_line.starts_with("Navigation"));
        assert!(text.contains("MANUFACTURERS"));
        assert!(text.contains("Toyota"));
        assert!(text.contains("1996 GM Trailblazer"));
        assert!(text.contains("Select a row"));
    }

    #[test]
    fn test_draw_vehicle_destination() {
        let mut app = test_app();
        let car = app.data.vehicles[2].clone().into();
        update(&mut app, Action::Select(car));

        let mut tui = TuiState::new(&app, true);
        let mut terminal = test_terminal();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.lines().next().unwrap().contains("2002 Chrysler SeaBreeze"));
        assert!(!text.contains("MANUFACTURERS"));
        // Breadcrumb, caption and status message
        assert_eq!(text.matches("2002 Chrysler SeaBreeze").count(), 3);
    }

    #[test]
    fn test_draw_link() {
        let mut app = test_app();
        update(&mut app, Action::OpenLink(INTRO_LINK));

        let mut tui = TuiState::new(&app, true);
        let mut terminal = test_terminal();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        assert!(screen_text(&terminal).contains("I'm the view you navigate to."));
    }

    #[test]
    fn test_hit_test_breadcrumb() {
        let mut app = test_app();
        let gm = app.data.manufacturers[1].clone().into();
        update(&mut app, Action::Select(gm));

        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test_breadcrumb(2, 0, area, &app), Some(0));
        assert_eq!(hit_test_breadcrumb(13, 0, area, &app), Some(1));
        assert_eq!(hit_test_breadcrumb(2, 5, area, &app), None);
        assert_eq!(hit_test_breadcrumb(40, 0, area, &app), None);
    }
}
