use chrono::{Datelike, Local, Weekday};
use dioxus::prelude::*;

/// One day of the weekly training plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDay {
    pub weekday: Weekday,
    pub label: &'static str,
    pub focus: &'static str,
}

pub static WEEKLY_PLAN: [PlanDay; 7] = [
    PlanDay { weekday: Weekday::Mon, label: "Thứ Hai", focus: "Thân trên: đẩy ngực, vai, tay sau" },
    PlanDay { weekday: Weekday::Tue, label: "Thứ Ba", focus: "Cardio nhẹ 30 phút + giãn cơ" },
    PlanDay { weekday: Weekday::Wed, label: "Thứ Tư", focus: "Thân dưới: squat, lunge, bắp chân" },
    PlanDay { weekday: Weekday::Thu, label: "Thứ Năm", focus: "Nghỉ chủ động: đi bộ, yoga" },
    PlanDay { weekday: Weekday::Fri, label: "Thứ Sáu", focus: "Thân trên: kéo lưng, tay trước" },
    PlanDay { weekday: Weekday::Sat, label: "Thứ Bảy", focus: "Toàn thân + bài tập core" },
    PlanDay { weekday: Weekday::Sun, label: "Chủ Nhật", focus: "Nghỉ ngơi hoàn toàn" },
];

pub fn plan_for(weekday: Weekday) -> &'static PlanDay {
    let index = weekday.num_days_from_monday() as usize;
    &WEEKLY_PLAN[index]
}

/// Row class; `today` is unknown until the browser has mounted the page
pub fn row_class(day: &PlanDay, today: Option<Weekday>) -> &'static str {
    if today == Some(day.weekday) {
        "c-schedule__row c-schedule__row--today"
    } else {
        "c-schedule__row"
    }
}

#[component]
pub fn Schedule() -> Element {
    // Effects only run on the client, so the server render and hydration agree
    let mut today = use_signal(|| None::<Weekday>);
    use_effect(move || {
        today.set(Some(Local::now().weekday()));
    });

    let subtitle = match today() {
        Some(weekday) => format!("Hôm nay: {}", plan_for(weekday).focus),
        None => "Kế hoạch tập luyện 7 ngày".to_string(),
    };

    rsx! {
        div { class: "c-page c-page--schedule",
            h1 { class: "c-page__title", "Lịch tập trong tuần" }
            p { class: "c-page__subtitle",
                "{subtitle}"
            }
            table { class: "c-schedule",
                tbody {
                    for day in WEEKLY_PLAN.iter() {
                        tr {
                            key: "{day.label}",
                            class: row_class(day, today()),
                            th { class: "c-schedule__day", "{day.label}" }
                            td { class: "c-schedule__focus", "{day.focus}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_in_weekday_order() {
        for (i, day) in WEEKLY_PLAN.iter().enumerate() {
            assert_eq!(day.weekday.num_days_from_monday() as usize, i);
        }
    }

    #[test]
    fn test_plan_for_returns_matching_day() {
        assert_eq!(plan_for(Weekday::Sun).label, "Chủ Nhật");
        assert_eq!(plan_for(Weekday::Wed).weekday, Weekday::Wed);
    }

    #[test]
    fn test_row_class_highlights_only_known_today() {
        let monday = plan_for(Weekday::Mon);
        assert_eq!(row_class(monday, None), "c-schedule__row");
        assert_eq!(row_class(monday, Some(Weekday::Tue)), "c-schedule__row");
        assert_eq!(
            row_class(monday, Some(Weekday::Mon)),
            "c-schedule__row c-schedule__row--today"
        );
    }
}
