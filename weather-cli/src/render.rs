use weather_core::WeatherReport;

/// Characters between the vertical borders.
const INNER_WIDTH: usize = 41;

const TITLE: &str = "Погода в Москве";

/// Bordered block for the terminal. Temperature, condition and the update
/// time are always shown; the rest only when the page had them.
pub fn render_report(report: &WeatherReport) -> String {
    let rule = "─".repeat(INNER_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("┌{rule}┐\n"));
    out.push_str(&format!("│{:^width$}│\n", TITLE, width = INNER_WIDTH));
    out.push_str(&format!("├{rule}┤\n"));

    out.push_str(&line("Температура", &report.temperature));
    out.push_str(&line("Состояние", &report.condition));

    let optional = [
        ("Ощущается как", &report.feels_like),
        ("Давление", &report.pressure),
        ("Влажность", &report.humidity),
        ("Ветер", &report.wind),
    ];
    for (label, value) in optional {
        if !value.is_empty() {
            out.push_str(&line(label, value));
        }
    }

    out.push_str(&line("Обновлено", &report.updated_at));
    out.push_str(&format!("└{rule}┘\n"));
    out
}

fn line(label: &str, value: &str) -> String {
    let prefix = format!("  {label}: ");
    let width = INNER_WIDTH.saturating_sub(prefix.chars().count() + 1);
    let value: String = value.chars().take(width).collect();
    format!("│{prefix}{value:<width$} │\n")
}
