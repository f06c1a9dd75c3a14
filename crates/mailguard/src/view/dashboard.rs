//! Results dashboard view.
//!
//! Latest scan card followed by the scan history list.

use chrono::{DateTime, NaiveDateTime};
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use mailguard_core::{HistoryEntry, ModelVerdict, ScanRecord};

use crate::message::{DashboardMessage, Message};
use crate::model::DashboardState;
use crate::style::widgets;
use crate::style::widgets::palette::{self, decision_color};

/// Render the dashboard.
pub fn view_dashboard<'a>(
    state: &'a DashboardState,
    latest: Option<&'a ScanRecord>,
) -> Element<'a, Message> {
    let p = palette::current();

    let title = text("Scan Results").size(28).color(p.text_primary);

    let new_scan = button(text("New Analysis").size(14))
        .on_press(Message::Dashboard(DashboardMessage::NewScan))
        .padding([10, 20])
        .style(widgets::primary_button_style);

    let logout = button(text("Logout").size(13))
        .on_press(Message::LogoutRequested)
        .padding([8, 16])
        .style(widgets::danger_button_style);

    let header = row![
        title,
        Space::new().width(Length::Fill),
        new_scan,
        logout,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let latest_section = latest.map_or_else(
        || Space::new().height(0).into(),
        create_latest_card,
    );

    let history_section = create_history_section(state);

    let content = column![
        header,
        latest_section,
        history_section,
    ]
    .spacing(20)
    .padding(32)
    .max_width(860);

    container(scrollable(container(content).center_x(Length::Fill)).style(widgets::scrollable_style))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(widgets::screen_style)
        .into()
}

/// Card showing the most recent scan in full.
fn create_latest_card(record: &ScanRecord) -> Element<'_, Message> {
    let p = palette::current();

    let heading = row![
        text("Latest Analysis Results").size(16).color(p.text_primary),
        Space::new().width(Length::Fill),
        text(format_timestamp(&record.timestamp))
            .size(12)
            .color(p.text_muted),
    ]
    .align_y(Alignment::Center);

    let snippet = text(&record.email_snippet).size(13).color(p.text_secondary);

    let mut verdicts = column![].spacing(8);
    for verdict in &record.results {
        verdicts = verdicts.push(create_verdict_row(verdict));
    }

    container(
        column![heading, snippet, Space::new().height(4), verdicts].spacing(10),
    )
    .padding(20)
    .width(Length::Fill)
    .style(widgets::card_style)
    .into()
}

/// One model's verdict with its confidence.
fn create_verdict_row(verdict: &ModelVerdict) -> Element<'_, Message> {
    let p = palette::current();

    container(
        column![
            row![
                column![
                    text(&verdict.model_name).size(13).color(p.text_primary),
                    text(&verdict.model_source).size(11).color(p.text_muted),
                ]
                .spacing(2)
                .width(Length::FillPortion(2)),
                text(verdict.decision.label())
                    .size(14)
                    .color(decision_color(verdict.decision))
                    .width(Length::FillPortion(1)),
                text(format!("{:.1}%", verdict.confidence_percent()))
                    .size(13)
                    .color(p.text_secondary),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            text(&verdict.description).size(12).color(p.text_secondary),
        ]
        .spacing(8),
    )
    .padding(12)
    .width(Length::Fill)
    .style(widgets::verdict_row_style)
    .into()
}

/// Scan history list with loading, error, and empty states.
fn create_history_section(state: &DashboardState) -> Element<'_, Message> {
    let p = palette::current();

    let heading = text("Analysis History").size(16).color(p.text_primary);

    let body: Element<'_, Message> = if state.is_loading {
        text("Loading history...").size(13).color(p.text_muted).into()
    } else if let Some(error) = &state.error {
        container(text(error).size(13))
            .padding(12)
            .width(Length::Fill)
            .style(widgets::error_banner_style)
            .into()
    } else if state.history.is_empty() {
        text("No previous analyses found")
            .size(13)
            .color(p.text_muted)
            .into()
    } else {
        let mut entries = column![].spacing(8);
        for entry in &state.history {
            entries = entries.push(create_history_row(entry));
        }
        entries.into()
    };

    container(column![heading, Space::new().height(8), body].spacing(4))
        .padding(20)
        .width(Length::Fill)
        .style(widgets::card_style)
        .into()
}

fn create_history_row(entry: &HistoryEntry) -> Element<'_, Message> {
    let p = palette::current();

    let mut verdict_labels = row![].spacing(10);
    for verdict in &entry.results {
        verdict_labels = verdict_labels.push(
            text(verdict.decision.label())
                .size(12)
                .color(decision_color(verdict.decision)),
        );
    }

    container(
        column![
            row![
                text(format_timestamp(&entry.timestamp))
                    .size(12)
                    .color(p.text_muted),
                Space::new().width(Length::Fill),
                verdict_labels,
            ]
            .align_y(Alignment::Center),
            text(&entry.email_snippet).size(13).color(p.text_secondary),
        ]
        .spacing(6),
    )
    .padding(12)
    .width(Length::Fill)
    .style(widgets::verdict_row_style)
    .into()
}

/// Formats a backend timestamp for display. Falls back to the raw
/// string when the backend uses a format chrono cannot parse.
fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %e, %Y %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%b %e, %Y %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_backend_timestamps_are_formatted() {
        assert_eq!(
            format_timestamp("2026-08-29T14:30:00.123456"),
            "Aug 29, 2026 14:30"
        );
    }

    #[test]
    fn unparsable_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
