use crate::domain::model::{ChannelCount, DailyCount, Report, Tally};
use crate::utils::error::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

/// 日期升冪；頻道依數量降冪，數量相同時依名稱排序
pub fn build_report(tally: Tally, app_id: &str, app_label: &str) -> Report {
    let daily = tally
        .daily
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect();

    let mut channels: Vec<ChannelCount> = tally
        .channels
        .into_iter()
        .map(|(channel, count)| ChannelCount { channel, count })
        .collect();
    channels.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.channel.cmp(&b.channel)));

    Report {
        app_id: app_id.to_string(),
        app_label: app_label.to_string(),
        total: tally.total,
        daily,
        channels,
    }
}

fn header_cell(title: &str) -> Cell {
    Cell::new(title)
        .add_attribute(Attribute::Bold)
        .fg(Color::White)
        .bg(Color::DarkGrey)
}

fn count_table<'a>(headers: [&str; 2], rows: impl Iterator<Item = (&'a str, u64)>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![header_cell(headers[0]), header_cell(headers[1])]);

    for (label, count) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

pub fn render_table(report: &Report) -> String {
    let label = &report.app_label;
    let mut out = format!("Total {} notifications found: {}\n\n", label, report.total);

    if !report.daily.is_empty() {
        let table = count_table(
            ["Date", "Count"],
            report.daily.iter().map(|d| (d.date.as_str(), d.count)),
        );
        out.push_str(&format!("Daily {} notification counts:\n{}\n\n", label, table));
    }

    if !report.channels.is_empty() {
        let table = count_table(
            ["Channel", "Count"],
            report.channels.iter().map(|c| (c.channel.as_str(), c.count)),
        );
        out.push_str(&format!("{} channel notification counts:\n{}\n", label, table));
    }

    out
}

pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
