//! HTML email body
//!
//! Inline styles only, since most mail clients drop `<style>` blocks.

use crate::style::{recommendation, SeverityStyle};
use pollen_domain::{DailyPollenReport, WeatherSnapshot};
use std::fmt::{self, Write};

const FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";

/// AAAAI thresholds in grains/m³: (icon, level, tree, grass, weed)
const AAAAI_SCALE: [(&str, &str, &str, &str, &str); 4] = [
    ("🟢", "Low", "1–14", "1–4", "1–9"),
    ("🟡", "Moderate", "15–89", "5–19", "10–49"),
    ("🟠", "High", "90–1,499", "20–199", "50–499"),
    ("🔴", "Very High", "≥1,500", "≥200", "≥500"),
];

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the full email body
///
/// The weather block is left out entirely when `weather` is `None`.
pub fn build_email_html(
    report: &DailyPollenReport,
    weather: Option<&WeatherSnapshot>,
    location: &str,
) -> String {
    let mut out = String::with_capacity(8192);
    // Writing into a String never fails
    let _ = render(&mut out, report, weather, location);
    out
}

fn render(
    out: &mut String,
    report: &DailyPollenReport,
    weather: Option<&WeatherSnapshot>,
    location: &str,
) -> fmt::Result {
    let location = html_escape(location);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(out, "</head>")?;
    writeln!(
        out,
        "<body style=\"margin: 0; padding: 0; font-family: {FONT_STACK}; background-color: #f5f5f5;\">"
    )?;
    writeln!(
        out,
        "<div style=\"max-width: 600px; margin: 20px auto 0 auto; background: white; \
         border-radius: 12px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,0.1);\">"
    )?;

    write_header(out, report, &location)?;
    write_overall(out, report)?;
    write_breakdown(out, report)?;
    if let Some(weather) = weather {
        write_weather(out, weather, &location)?;
    }
    write_recommendation(out, report)?;
    write_scale(out)?;
    write_footer(out)?;

    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_header(out: &mut String, report: &DailyPollenReport, location: &str) -> fmt::Result {
    writeln!(
        out,
        "<div style=\"background: linear-gradient(135deg, #1b5e20, #43a047); padding: 24px; text-align: center;\">"
    )?;
    writeln!(
        out,
        "<h1 style=\"color: white; margin: 0; font-size: 22px;\">🌿 {location} Daily Allergy Report</h1>"
    )?;
    writeln!(
        out,
        "<p style=\"color: rgba(255,255,255,0.85); margin: 8px 0 0 0; font-size: 14px;\">{} | {location} Area</p>",
        html_escape(report.date())
    )?;
    writeln!(out, "</div>")
}

fn write_overall(out: &mut String, report: &DailyPollenReport) -> fmt::Result {
    let worst = report.worst_severity();
    let style = SeverityStyle::of(worst);

    writeln!(
        out,
        "<div style=\"text-align: center; padding: 24px; background: {};\">",
        style.background
    )?;
    writeln!(
        out,
        "<p style=\"margin: 0 0 8px 0; font-size: 14px; color: #666; text-transform: uppercase; \
         letter-spacing: 1px;\">Overall Allergy Level</p>"
    )?;
    writeln!(
        out,
        "<h2 style=\"margin: 0; font-size: 36px; color: {};\">{} {}</h2>",
        style.text, style.icon, worst
    )?;
    writeln!(out, "</div>")
}

fn write_breakdown(out: &mut String, report: &DailyPollenReport) -> fmt::Result {
    const TH: &str = "padding: 10px 16px; font-size: 13px; color: #888; \
                      text-transform: uppercase; letter-spacing: 0.5px;";

    writeln!(out, "<div style=\"padding: 0 20px;\">")?;
    writeln!(
        out,
        "<h3 style=\"color: #333; font-size: 16px; margin: 20px 0 12px 0; \
         border-bottom: 2px solid #eee; padding-bottom: 8px;\">📊 Breakdown by Category</h3>"
    )?;
    writeln!(out, "<table style=\"width: 100%; border-collapse: collapse;\">")?;
    writeln!(
        out,
        "<tr style=\"background: #fafafa;\">\
         <th style=\"{TH} text-align: left;\">Allergen</th>\
         <th style=\"{TH} text-align: center;\">Level</th></tr>"
    )?;

    for reading in report.readings() {
        let style = SeverityStyle::of(reading.severity());
        writeln!(
            out,
            "<tr>\
             <td style=\"padding: 12px 16px; font-size: 15px; border-bottom: 1px solid #eee;\">{}</td>\
             <td style=\"padding: 12px 16px; font-size: 15px; font-weight: bold; color: {}; \
             border-bottom: 1px solid #eee; text-align: center;\">{} {}</td></tr>",
            reading.category(),
            style.text,
            style.icon,
            reading.severity()
        )?;
    }

    writeln!(out, "</table>")?;
    writeln!(out, "</div>")
}

fn write_weather(out: &mut String, weather: &WeatherSnapshot, location: &str) -> fmt::Result {
    const TD: &str = "padding: 4px 0;";

    writeln!(
        out,
        "<div style=\"background: #e3f2fd; border-radius: 8px; padding: 16px; margin: 20px;\">"
    )?;
    writeln!(
        out,
        "<h3 style=\"margin: 0 0 8px 0; color: #1565c0; font-size: 16px;\">🌤️ {location} Weather</h3>"
    )?;
    writeln!(out, "<table style=\"width: 100%;\">")?;
    writeln!(
        out,
        "<tr><td style=\"{TD}\">🌡️ Temperature: <strong>{}°F</strong></td>\
         <td style=\"{TD}\">💧 Humidity: <strong>{}%</strong></td></tr>",
        weather.temperature_f, weather.humidity_pct
    )?;
    writeln!(
        out,
        "<tr><td style=\"{TD}\">💨 Wind: <strong>{} mph</strong></td>\
         <td style=\"{TD}\">🌧️ Precip: <strong>{:.1} mm</strong></td></tr>",
        weather.wind_mph, weather.precipitation_mm
    )?;
    writeln!(out, "</table>")?;
    writeln!(out, "</div>")
}

fn write_recommendation(out: &mut String, report: &DailyPollenReport) -> fmt::Result {
    let worst = report.worst_severity();

    writeln!(
        out,
        "<div style=\"margin: 20px; padding: 16px; background: #f5f5f5; \
         border-left: 4px solid {}; border-radius: 0 8px 8px 0;\">",
        SeverityStyle::of(worst).text
    )?;
    writeln!(
        out,
        "<p style=\"margin: 0; font-size: 14px; color: #444; line-height: 1.5;\">\
         <strong>💊 Recommendation:</strong> {}</p>",
        html_escape(recommendation(worst))
    )?;
    writeln!(out, "</div>")
}

fn write_scale(out: &mut String) -> fmt::Result {
    const CELL: &str = "padding: 6px 8px; text-align: center;";

    writeln!(out, "<div style=\"padding: 0 20px 20px 20px;\">")?;
    writeln!(out, "<details style=\"cursor: pointer;\">")?;
    writeln!(
        out,
        "<summary style=\"font-size: 13px; color: #888; padding: 8px 0;\">📏 AAAAI Severity Scale Reference</summary>"
    )?;
    writeln!(
        out,
        "<table style=\"width: 100%; border-collapse: collapse; margin-top: 8px; font-size: 12px;\">"
    )?;
    writeln!(
        out,
        "<tr style=\"background: #fafafa;\">\
         <th style=\"padding: 6px 8px; text-align: left;\">Level</th>\
         <th style=\"{CELL}\">Tree (gr/m³)</th>\
         <th style=\"{CELL}\">Grass (gr/m³)</th>\
         <th style=\"{CELL}\">Weed (gr/m³)</th></tr>"
    )?;

    for (i, (icon, level, tree, grass, weed)) in AAAAI_SCALE.iter().enumerate() {
        let shade = if i % 2 == 1 {
            " style=\"background: #fafafa;\""
        } else {
            ""
        };
        writeln!(
            out,
            "<tr{shade}><td style=\"padding: 6px 8px;\">{icon} {level}</td>\
             <td style=\"{CELL}\">{tree}</td>\
             <td style=\"{CELL}\">{grass}</td>\
             <td style=\"{CELL}\">{weed}</td></tr>"
        )?;
    }

    writeln!(out, "</table>")?;
    writeln!(
        out,
        "<p style=\"font-size: 11px; color: #aaa; margin: 6px 0 0 0;\">\
         Source: American Academy of Allergy, Asthma &amp; Immunology (AAAAI)</p>"
    )?;
    writeln!(out, "</details>")?;
    writeln!(out, "</div>")
}

fn write_footer(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "<div style=\"background: #fafafa; padding: 16px; text-align: center; border-top: 1px solid #eee;\">"
    )?;
    writeln!(
        out,
        "<p style=\"margin: 0; font-size: 11px; color: #aaa; line-height: 1.6;\">\
         Pollen data: ASAP Illinois, asapillinois.com/pollen-count/<br>\
         Collected Mon–Fri, April–October by certified allergists<br>\
         Weather data: Open-Meteo API (open-meteo.com)</p>"
    )?;
    writeln!(out, "</div>")
}
