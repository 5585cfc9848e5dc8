use crate::constants::{HEADING, PLACEHOLDER};
use crate::models::ViewModel;
use crate::region::Region;

/// Entry `index` of `items`, or the placeholder when absent or blank
fn or_placeholder(items: &[String], index: usize) -> &str {
    items
        .get(index)
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER)
}

/// Formats the view state as three forecast cards, or as the error paragraph
pub fn format_cards(view: &ViewModel, region: Region) -> String {
    let mut output = format!("{}\n都道府県選択：{}\n\n", HEADING, region.label());

    if let Some(error) = &view.error {
        output.push_str(error);
        output.push('\n');
        return output;
    }

    for (i, day) in ["今日", "明日"].iter().enumerate() {
        output.push_str(&format!(
            "{}：{}\n  天気：{}\n  気温：{}\n\n",
            day,
            or_placeholder(&view.date, i),
            or_placeholder(&view.weather, i),
            or_placeholder(&view.temps, i)
        ));
    }

    output.push_str(&format!(
        "明後日：{}\n  天気：{}\n  気温：{}~{}\n",
        or_placeholder(&view.date, 2),
        or_placeholder(&view.weather, 2),
        or_placeholder(view.temps_min(), 1),
        or_placeholder(view.temps_max(), 1)
    ));
    output
}

/// Formats the selectable regions, marking the current one
pub fn format_regions(current: Region) -> String {
    let mut output = String::from("都道府県選択:\n");
    for region in Region::ALL {
        let marker = if region == current { "*" } else { " " };
        output.push_str(&format!("{} {}: {}\n", marker, region.index(), region.label()));
    }
    output
}
