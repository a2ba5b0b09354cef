use chrono::{DateTime, Local};
use recipe_core::{AppViewModel, Phase, RecipeRowView};

/// Render the view model as terminal lines: one status line, then one line per recipe.
pub fn render(view: &AppViewModel, fetched_at: Option<DateTime<Local>>) -> Vec<String> {
    let phase_label = match &view.phase {
        Phase::Idle => "Idle".to_string(),
        Phase::Loading => "Loading".to_string(),
        Phase::Ready if view.rows.is_empty() => "No recipes available".to_string(),
        Phase::Ready => "Ready".to_string(),
        Phase::Error(message) => format!("Error: {message}"),
    };

    let status = match fetched_at {
        Some(at) => format!(
            "{} | Recipes: {} | Fetched: {}",
            phase_label,
            view.recipe_count,
            at.format("%Y-%m-%d %H:%M:%S")
        ),
        None => format!("{} | Recipes: {}", phase_label, view.recipe_count),
    };

    let mut lines = Vec::with_capacity(1 + view.rows.len());
    lines.push(status);
    lines.extend(view.rows.iter().map(format_recipe_row));
    lines
}

fn format_recipe_row(row: &RecipeRowView) -> String {
    let mut links = Vec::new();
    if row.has_source {
        links.push("source");
    }
    if row.has_video {
        links.push("video");
    }
    if links.is_empty() {
        format!("{} ({})", row.name, row.cuisine)
    } else {
        format!("{} ({}) [{}]", row.name, row.cuisine, links.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use recipe_core::{AppViewModel, Phase, RecipeRowView};

    use super::render;

    fn row(name: &str, has_source: bool, has_video: bool) -> RecipeRowView {
        RecipeRowView {
            id: name.to_lowercase(),
            name: name.to_string(),
            cuisine: "British".to_string(),
            thumbnail: None,
            has_video,
            has_source,
        }
    }

    #[test]
    fn ready_view_lists_rows_with_links() {
        let view = AppViewModel {
            phase: Phase::Ready,
            rows: vec![row("Bakewell Tart", true, true), row("Eccles Cake", false, false)],
            recipe_count: 2,
            ..AppViewModel::default()
        };
        let at = Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

        let lines = render(&view, Some(at));

        assert_eq!(
            lines,
            vec![
                "Ready | Recipes: 2 | Fetched: 2024-05-01 12:30:00".to_string(),
                "Bakewell Tart (British) [source, video]".to_string(),
                "Eccles Cake (British)".to_string(),
            ]
        );
    }

    #[test]
    fn empty_ready_view_is_not_an_error() {
        let view = AppViewModel {
            phase: Phase::Ready,
            ..AppViewModel::default()
        };
        assert_eq!(render(&view, None), vec!["No recipes available | Recipes: 0".to_string()]);
    }

    #[test]
    fn error_view_shows_message() {
        let view = AppViewModel {
            phase: Phase::Error("The request timed out.".to_string()),
            error_message: Some("The request timed out.".to_string()),
            ..AppViewModel::default()
        };
        assert_eq!(
            render(&view, None),
            vec!["Error: The request timed out. | Recipes: 0".to_string()]
        );
    }
}
