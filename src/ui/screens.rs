//! Wizard step screens
//!
//! Each function draws one step into the content area. They only read the
//! state; all changes go through the input handler.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Wrap,
        canvas::{Canvas, Points},
    },
};

use crate::app::{AppState, LocationFocus};
use crate::draft::{CharField, LatLng};
use crate::gazetteer::{self, PlaceKind};
use crate::theme::{Colors, Styles};
use crate::wizard::WizardStep;
use crate::wizard::characteristics::FieldValue;
use crate::wizard::location::DEFAULT_MAP_CENTER;

/// Half the height of the map view, in degrees of latitude
const MAP_SPAN_DEGREES: f64 = 0.08;

fn panel(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        })
        .title(format!(" {} ", title))
}

// ============================================================================
// Step 1.1 - Location
// ============================================================================

pub fn render_location(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(columns[0]);

    let location = &state.wizard.location;
    let address_focused = state.location_focus == LocationFocus::Address;

    let input_line = if location.address.is_empty() {
        Line::from(Span::styled("Type a city or neighbourhood...", Styles::text_muted()))
    } else {
        let mut spans = vec![Span::styled(location.address.clone(), Styles::text())];
        if address_focused {
            spans.push(Span::styled("_", Styles::focused()));
        }
        Line::from(spans)
    };
    f.render_widget(
        Paragraph::new(input_line).block(panel("Address", address_focused)),
        left[0],
    );

    let items: Vec<ListItem> = location
        .suggestions
        .iter()
        .map(|place| {
            let kind = match place.kind {
                PlaceKind::City => "city",
                PlaceKind::Neighborhood => "area",
            };
            ListItem::new(Line::from(vec![
                Span::styled(place.label(), Styles::text()),
                Span::styled(format!("  {}", kind), Styles::text_muted()),
            ]))
        })
        .collect();
    let mut list_state = ListState::default();
    if !location.suggestions.is_empty() {
        list_state.select(Some(location.highlighted));
    }
    f.render_stateful_widget(
        List::new(items)
            .block(panel("Suggestions", false))
            .highlight_style(Styles::selected())
            .highlight_symbol("> "),
        left[1],
        &mut list_state,
    );

    render_map(f, columns[1], location.marker_position, !address_focused);
}

fn render_map(f: &mut Frame, area: Rect, pin: Option<LatLng>, focused: bool) {
    let center = pin.unwrap_or(DEFAULT_MAP_CENTER);
    let lat_bounds = [center.lat - MAP_SPAN_DEGREES, center.lat + MAP_SPAN_DEGREES];
    let lng_bounds = [
        center.lng - MAP_SPAN_DEGREES * 2.0,
        center.lng + MAP_SPAN_DEGREES * 2.0,
    ];
    let in_view = |p: &LatLng| {
        (lat_bounds[0]..=lat_bounds[1]).contains(&p.lat)
            && (lng_bounds[0]..=lng_bounds[1]).contains(&p.lng)
    };

    let places: Vec<_> = gazetteer::PLACES
        .iter()
        .filter(|p| in_view(&p.latlng))
        .collect();
    let place_coords: Vec<(f64, f64)> = places
        .iter()
        .map(|p| (p.latlng.lng, p.latlng.lat))
        .collect();

    let title = match pin {
        Some(p) => format!("Map  {}", p),
        None => "Map  (no pin)".to_string(),
    };

    let canvas = Canvas::default()
        .block(panel(&title, focused))
        .marker(Marker::Braille)
        .x_bounds(lng_bounds)
        .y_bounds(lat_bounds)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &place_coords,
                color: Colors::FG_MUTED,
            });
            for place in &places {
                ctx.print(
                    place.latlng.lng,
                    place.latlng.lat,
                    Span::styled(place.name, Styles::text_secondary()),
                );
            }
            if let Some(p) = pin {
                ctx.layer();
                ctx.print(
                    p.lng,
                    p.lat,
                    Span::styled(
                        "X",
                        Style::default().fg(Colors::PIN).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    f.render_widget(canvas, area);
}

// ============================================================================
// Step 1.2 - Property type
// ============================================================================

pub fn render_property_type(f: &mut Frame, area: Rect, state: &AppState) {
    let step = &state.wizard.property_type;
    let items: Vec<ListItem> = step
        .options
        .iter()
        .map(|category| {
            let chosen = step.selected == Some(*category);
            let mark = if chosen { "(*)" } else { "( )" };
            let style = if chosen { Styles::success() } else { Styles::text() };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), style),
                Span::styled(category.label(), style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(step.highlighted));
    f.render_stateful_widget(
        List::new(items)
            .block(panel("Property type", true))
            .highlight_style(Styles::selected())
            .highlight_symbol("> "),
        area,
        &mut list_state,
    );
}

// ============================================================================
// Step 1.3 - General characteristics
// ============================================================================

pub fn render_characteristics(f: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.wizard.characteristics;
    let Some(branch) = form.branch else {
        f.render_widget(
            Paragraph::new("Choose a property type first.")
                .style(Styles::warning())
                .block(panel("General characteristics", true)),
            area,
        );
        return;
    };

    let mut lines: Vec<Line> = Vec::with_capacity(form.inputs().len() + 2);
    for (i, input) in form.inputs().iter().enumerate() {
        let focused = i == form.focus;
        let required = input.field().is_required_in(branch);
        let label_style = if focused {
            Styles::focused()
        } else {
            Styles::text_secondary()
        };
        let value = match input.value() {
            FieldValue::Choice(None) => "< choose >".to_string(),
            FieldValue::Choice(Some(_)) => format!("< {} >", input.display_value()),
            _ => input.display_value(),
        };
        let value_style = if !input.is_filled() && required {
            Styles::warning()
        } else {
            Styles::text()
        };

        lines.push(Line::from(vec![
            Span::styled(if focused { "> " } else { "  " }, Styles::focused()),
            Span::styled(format!("{:<24}", field_label(input.field(), required)), label_style),
            Span::styled(value, value_style),
            Span::styled(
                if focused && matches!(input.value(), FieldValue::Text(_)) {
                    "_"
                } else {
                    ""
                },
                Styles::focused(),
            ),
        ]));
    }

    let missing = form.missing_required();
    lines.push(Line::from(""));
    lines.push(if missing.is_empty() {
        Line::from(Span::styled("All required fields are filled.", Styles::success()))
    } else {
        Line::from(Span::styled(
            format!("{} required field(s) left", missing.len()),
            Styles::text_muted(),
        ))
    });

    f.render_widget(
        Paragraph::new(lines)
            .block(panel("General characteristics  (* required)", true))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn field_label(field: CharField, required: bool) -> String {
    if required {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

// ============================================================================
// Step 1.4 - Interior equipment
// ============================================================================

pub fn render_interior(f: &mut Frame, area: Rect, state: &AppState) {
    let step = &state.wizard.interior;
    let items: Vec<ListItem> = crate::wizard::InteriorItem::ALL
        .iter()
        .map(|item| {
            let mark = if step.is_checked(*item) { "[x]" } else { "[ ]" };
            ListItem::new(format!("{} {}", mark, item.label()))
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(area);

    let mut list_state = ListState::default();
    list_state.select(Some(step.focus));
    f.render_stateful_widget(
        List::new(items)
            .block(panel("Interior equipment", true))
            .highlight_style(Styles::selected())
            .highlight_symbol("> "),
        chunks[0],
        &mut list_state,
    );
    f.render_widget(
        Paragraph::new("Optional. Skip leaves these unset.").style(Styles::text_muted()),
        chunks[1],
    );
}

// ============================================================================
// Steps 2 and 3 - placeholders
// ============================================================================

pub fn render_coming_soon(f: &mut Frame, area: Rect, step: WizardStep) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(step.title(), Styles::title())),
        Line::from(""),
        Line::from(Span::styled("Coming soon", Styles::text_secondary())),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(panel(step.title(), false)),
        area,
    );
}
