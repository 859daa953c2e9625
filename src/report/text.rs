use crate::report::{ReportContext, format_score, format_value};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let labels = &ctx.labels;
    let mut out = String::new();

    out.push_str(ctx.title);
    out.push('\n');
    out.push_str(&"=".repeat(ctx.title.chars().count()));
    out.push_str("\n\n");

    out.push_str(labels.entries_heading);
    out.push('\n');
    if ctx.entries.is_empty() {
        out.push_str(labels.empty_list);
        out.push('\n');
    }
    for (i, e) in ctx.entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} [{}] {}: {}\n",
            i + 1,
            e.label,
            e.id,
            e.date,
            format_value(e.value)
        ));
    }
    if ctx.rejected > 0 {
        out.push_str(&format!("{}: {}\n", labels.rejected_inputs, ctx.rejected));
    }
    out.push('\n');

    out.push_str(labels.summary_heading);
    out.push('\n');
    match &ctx.stats {
        Some(s) => {
            // mean and median are derived; best, worst and latest are stored scores
            out.push_str(&format!("{}: {}\n", labels.mean, format_score(s.mean)));
            out.push_str(&format!("{}: {}\n", labels.median, format_score(s.median)));
            out.push_str(&format!("{}: {}\n", labels.best, format_value(s.best)));
            out.push_str(&format!("{}: {}\n", labels.worst, format_value(s.worst)));
            out.push_str(&format!("{}: {}\n\n", labels.latest, format_value(s.latest)));
        }
        None => {
            out.push_str(labels.no_grades);
            out.push_str("\n\n");
        }
    }

    out.push_str(labels.trend_heading);
    out.push('\n');
    match (ctx.verdict, ctx.verdict_message) {
        (Some(trend), Some(message)) => {
            out.push_str(&format!("{}: {}\n", labels.chart_points, ctx.chart_points));
            out.push_str(&format!("{}: {}\n", labels.verdict, labels.trend_name(trend)));
            out.push_str(message);
            out.push('\n');
        }
        _ => {
            out.push_str(ctx.insufficient_title);
            out.push('\n');
            out.push_str(ctx.insufficient_hint);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
