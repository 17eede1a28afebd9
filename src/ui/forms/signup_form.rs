//! Signup form rendering

use super::field_renderer::{draw_error_line, draw_field, field_height, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{DraftField, FieldPath, FocusTarget, FormController, TechEntry, TechId};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Width of the knowledge input next to each tech title
const KNOWLEDGE_WIDTH: u16 = 22;

/// Draw the signup form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(24), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the scalar fields and the tech list
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let errors = form.errors();

    let scalar_fields = [
        (DraftField::Name, FieldPath::Name),
        (DraftField::Email, FieldPath::Email),
        (DraftField::Password, FieldPath::Password),
        (DraftField::ConfirmPassword, FieldPath::ConfirmPassword),
    ];

    let mut constraints: Vec<Constraint> = scalar_fields
        .iter()
        .map(|(_, path)| Constraint::Length(field_height(errors.message_for(*path).is_some())))
        .collect();
    constraints.push(Constraint::Min(FIELD_HEIGHT)); // Tech list

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let form_focused = !matches!(
        form.focused(),
        Some(FocusTarget::AddTechButton | FocusTarget::SubmitButton)
    );
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Sign up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for (i, (field, path)) in scalar_fields.iter().enumerate() {
        if let Some(input) = form.draft().field(*field) {
            draw_field(
                frame,
                chunks[i],
                input,
                form.is_focused(FocusTarget::Field(*field)),
                app.state.mask_passwords,
                errors.message_for(*path).as_deref(),
            );
        }
    }

    draw_tech_list(frame, chunks[scalar_fields.len()], app);
}

/// Draw one repeated group per tech entry, scrolled to keep focus visible
fn draw_tech_list(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let techs = &form.draft().techs;

    let block = Block::default()
        .title(format!(" Techs ({}) ", techs.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let list_error = form.errors().message_for(FieldPath::Techs);
    let (rows_area, list_error_area) = match list_error {
        Some(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(inner);
            (chunks[0], Some(chunks[1]))
        }
        None => (inner, None),
    };

    if let (Some(message), Some(error_area)) = (list_error.as_deref(), list_error_area) {
        draw_error_line(frame, error_area, message);
    }

    if techs.is_empty() {
        let hint = Paragraph::new(Line::from(vec![
            Span::raw("No techs yet. Press "),
            Span::styled(
                crate::platform::ADD_TECH_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" to add one."),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, rows_area);
        return;
    }

    let heights: Vec<u16> = (0..techs.len())
        .map(|index| field_height(row_has_error(form, index)))
        .collect();
    let focused_row = form
        .focused()
        .and_then(|target| target.tech_id())
        .and_then(|id| techs.position(id));
    let visible = visible_rows(&heights, rows_area.height, focused_row);

    let mut y = rows_area.y;
    for (index, (id, entry)) in techs.iter().enumerate() {
        if !visible.contains(&index) {
            continue;
        }
        let row_area = Rect {
            x: rows_area.x,
            y,
            width: rows_area.width,
            height: heights[index],
        };
        draw_tech_row(frame, row_area, app, index, entry, id);
        y += heights[index];
    }
}

fn row_has_error(form: &FormController, index: usize) -> bool {
    let errors = form.errors();
    errors.for_path(FieldPath::TechTitle(index)).next().is_some()
        || errors.for_path(FieldPath::TechKnowledge(index)).next().is_some()
}

fn draw_tech_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    index: usize,
    entry: &TechEntry,
    id: TechId,
) {
    let form = &app.state.form;
    let errors = form.errors();

    let constraints = if form.with_knowledge() {
        vec![Constraint::Min(10), Constraint::Length(KNOWLEDGE_WIDTH)]
    } else {
        vec![Constraint::Min(10)]
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let mut title = entry.title.clone();
    title.label = format!("Tech #{}", index + 1);
    draw_field(
        frame,
        columns[0],
        &title,
        form.is_focused(FocusTarget::Field(DraftField::TechTitle(id))),
        app.state.mask_passwords,
        errors.message_for(FieldPath::TechTitle(index)).as_deref(),
    );

    if form.with_knowledge() {
        draw_field(
            frame,
            columns[1],
            &entry.knowledge,
            form.is_focused(FocusTarget::Field(DraftField::TechKnowledge(id))),
            app.state.mask_passwords,
            errors.message_for(FieldPath::TechKnowledge(index)).as_deref(),
        );
    }
}

/// Rows that fit in `available`, starting late enough to include `focus`
fn visible_rows(heights: &[u16], available: u16, focus: Option<usize>) -> Range<usize> {
    let mut start = 0;
    if let Some(focus) = focus {
        while start < focus && heights[start..=focus].iter().sum::<u16>() > available {
            start += 1;
        }
    }

    let mut end = start;
    let mut used = 0u16;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    start..end
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let add_selected = form.is_focused(FocusTarget::AddTechButton);
    let submit_selected = form.is_focused(FocusTarget::SubmitButton);
    let is_focused = add_selected || submit_selected;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Add tech
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(1),             // spacer
            Constraint::Min(0),                // Shortcut help
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        "Add tech",
        add_selected,
        Some(Color::Blue),
    );
    render_action_button(
        frame,
        button_chunks[1],
        "Submit",
        submit_selected,
        Some(Color::Green),
    );

    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
            Span::raw(" submit"),
        ]),
        Line::from(vec![
            Span::styled(crate::platform::ADD_TECH_SHORTCUT, key_style),
            Span::raw(" add tech"),
        ]),
        Line::from(vec![
            Span::styled(crate::platform::REMOVE_TECH_SHORTCUT, key_style),
            Span::raw(" remove tech"),
        ]),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, button_chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_rows_all_fit() {
        assert_eq!(visible_rows(&[3, 3, 3], 20, None), 0..3);
    }

    #[test]
    fn test_visible_rows_clips_from_bottom() {
        assert_eq!(visible_rows(&[3, 4, 3, 3], 8, Some(0)), 0..2);
    }

    #[test]
    fn test_visible_rows_scrolls_to_focus() {
        assert_eq!(visible_rows(&[3, 3, 3, 3], 7, Some(3)), 2..4);
    }

    #[test]
    fn test_visible_rows_empty() {
        assert_eq!(visible_rows(&[], 10, None), 0..0);
    }

    #[test]
    fn test_visible_rows_focus_taller_than_area() {
        assert_eq!(visible_rows(&[3, 4], 2, Some(1)), 1..1);
    }
}
