use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::Recipe;
use crate::core::navigation::SearchParams;
use crate::core::state::{App, Route};
use crate::tui::component::Component;
use crate::tui::components::{Notice, RecipeRow, TitleBar};
use crate::tui::{Focus, TuiState};

/// Static category shortcuts shown between the two feeds.
pub const CATEGORIES: &[&str] = &["Soup", "Chicken", "Seafood", "Dessert"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.status_message.clone(),
        app.feeds_loading,
        spinner_frame,
    );
    title_bar.render(frame, title_area);

    let help = match app.current_route() {
        Route::Home => {
            draw_home(frame, main_area, app, tui);
            " Enter Search/Open  Tab Focus  ←→ Select  Ctrl+R Reload  Ctrl+C Quit "
        }
        Route::Results(params) => {
            draw_results(frame, main_area, params);
            " Esc Back  Ctrl+C Quit "
        }
        Route::Detail(recipe) => {
            draw_detail(frame, main_area, recipe);
            " Esc Back  Ctrl+C Quit "
        }
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(message) = &app.notice {
        let area = frame.area();
        Notice { message }.render(frame, area);
    }
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [search_area, popular_area, category_area, newest_area, _] =
        Layout::vertical([Length(3), Length(6), Length(3), Length(6), Min(0)]).areas(area);

    tui.search_bar.focused = tui.focus == Focus::Search;
    tui.search_bar.render(frame, search_area);

    RecipeRow {
        title: "Popular Recipes",
        recipes: &tui.popular,
        selected: tui.popular_selected,
        focused: tui.focus == Focus::Popular,
        loading: app.feeds_loading,
    }
    .render(frame, popular_area);

    draw_categories(frame, category_area);

    RecipeRow {
        title: "New Recipes",
        recipes: &tui.newest,
        selected: tui.newest_selected,
        focused: tui.focus == Focus::Newest,
        loading: app.feeds_loading,
    }
    .render(frame, newest_area);
}

fn draw_categories(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, name) in CATEGORIES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(*name, Style::default().add_modifier(Modifier::BOLD)));
    }
    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::bordered().title(" Category "));
    frame.render_widget(paragraph, area);
}

fn draw_results(frame: &mut Frame, area: Rect, params: &SearchParams) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Keyword: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("\"{}\"", params.search_keyword)),
        ]),
        Line::from(vec![
            Span::styled("Mode:    ", Style::default().fg(Color::DarkGray)),
            Span::raw(params.search_mode.as_str()),
        ]),
    ];
    let paragraph = Paragraph::new(lines).block(Block::bordered().title(" Search Results "));
    frame.render_widget(paragraph, area);
}

fn draw_detail(frame: &mut Frame, area: Rect, recipe: &Recipe) {
    let mut lines = vec![
        Line::styled(
            recipe.display_title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(recipe.picture_uri(), Style::default().fg(Color::DarkGray)),
        Line::raw(""),
    ];
    for (key, value) in &recipe.extra {
        let text = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
            Span::raw(text),
        ]));
    }
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(" Recipe "));
    frame.render_widget(paragraph, area);
}
