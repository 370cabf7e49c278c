/// Integers when `places` is zero, otherwise rounded to `places` with
/// trailing zeros trimmed down to a single fractional digit.
pub fn format_tick_label(value: f32, places: u32) -> String {
    if places == 0 {
        return format!("{}", value.round() as i64);
    }

    let mut text = format!("{value:.prec$}", prec = places as usize);
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }

    if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
        text.remove(0);
    }

    text
}

pub fn format_zoom(zoom: f32) -> String {
    let percent = zoom * 100.0;
    if percent >= 10.0 {
        format!("{percent:.0}%")
    } else {
        format!("{percent:.2}%")
    }
}
