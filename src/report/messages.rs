use clap::ValueEnum;
use serde::Serialize;

use crate::model::trend::Trend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLabels {
    pub entries_heading: &'static str,
    pub summary_heading: &'static str,
    pub trend_heading: &'static str,
    pub empty_list: &'static str,
    pub no_grades: &'static str,
    pub rejected_inputs: &'static str,
    pub mean: &'static str,
    pub median: &'static str,
    pub best: &'static str,
    pub worst: &'static str,
    pub latest: &'static str,
    pub chart_points: &'static str,
    pub verdict: &'static str,
    pub improving: &'static str,
    pub declined: &'static str,
}

impl ReportLabels {
    pub fn trend_name(&self, trend: Trend) -> &'static str {
        match trend {
            Trend::Improving => self.improving,
            Trend::Declined => self.declined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalog {
    pub report_title: &'static str,
    pub labels: ReportLabels,
    pub label_prefix: &'static str,
    pub improving: &'static str,
    pub declined: &'static str,
    pub insufficient_title: &'static str,
    pub insufficient_hint: &'static str,
}

impl MessageCatalog {
    pub fn english() -> Self {
        Self {
            report_title: "Grade Progress Report",
            labels: ReportLabels {
                entries_heading: "1. Recorded grades",
                summary_heading: "2. Summary",
                trend_heading: "3. Trend",
                empty_list: "(none)",
                no_grades: "No grades recorded.",
                rejected_inputs: "Rejected inputs",
                mean: "Mean",
                median: "Median",
                best: "Best",
                worst: "Worst",
                latest: "Latest",
                chart_points: "Chart points",
                verdict: "Verdict",
                improving: "improving",
                declined: "declined",
            },
            label_prefix: "Test",
            improving: "Well done, champion! Your chart is trending upward. Keep up the smart work.",
            declined: "A dip in the chart is completely normal and works like a springboard for your next success. Don't worry!",
            insufficient_title: "At least 2 grades are needed to show the trend chart",
            insufficient_hint: "Enter grades from different tests so we can review your progress together.",
        }
    }

    pub fn persian() -> Self {
        Self {
            report_title: "تحلیل پیشرفت تحصیلی",
            labels: ReportLabels {
                entries_heading: "1. لیست نمرات ثبت شده",
                summary_heading: "2. خلاصه",
                trend_heading: "3. تحلیل نموداری پیشرفت",
                empty_list: "(خالی)",
                no_grades: "هنوز نمره‌ای ثبت نشده است.",
                rejected_inputs: "ورودی‌های رد شده",
                mean: "میانگین",
                median: "میانه",
                best: "بهترین",
                worst: "کمترین",
                latest: "آخرین",
                chart_points: "نقاط نمودار",
                verdict: "نتیجه",
                improving: "صعودی",
                declined: "نزولی",
            },
            label_prefix: "آزمون",
            improving: "آفرین قهرمان! روند نمودارت صعودیه. همین تلاش هوشمندانه رو ادامه بده.",
            declined: "افت نمره توی نمودار کاملاً طبیعیه و مثل یه سکوی پرش برای موفقیت‌های بعدی عمل می‌کنه. نگران نباش!",
            insufficient_title: "برای مشاهده تحلیل نموداری حداقل به ۲ نمره نیاز داریم",
            insufficient_hint: "نمره‌های خودت رو از آزمون‌های مختلف وارد کن تا با هم روندت رو بررسی کنیم.",
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::Fa => Self::persian(),
        }
    }

    pub fn verdict_message(&self, trend: Trend) -> &'static str {
        match trend {
            Trend::Improving => self.improving,
            Trend::Declined => self.declined,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/messages.rs"]
mod tests;
