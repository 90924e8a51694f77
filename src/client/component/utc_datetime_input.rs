use chrono::{DateTime, NaiveDateTime, Utc};
use dioxus::prelude::*;

const FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses an optional `YYYY-MM-DD HH:MM` UTC schedule.
///
/// An empty input means "post immediately" and yields `Ok(None)`.
pub fn parse_schedule(input: &str, now: DateTime<Utc>) -> Result<Option<DateTime<Utc>>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let scheduled = NaiveDateTime::parse_from_str(input, FORMAT)
        .map_err(|_| "Format must be: YYYY-MM-DD HH:MM".to_string())?
        .and_utc();

    if scheduled < now {
        return Err("Scheduled time cannot be in the past".to_string());
    }

    Ok(Some(scheduled))
}

/// UTC date & time input with inline validation.
#[component]
pub fn UtcDateTimeInput(
    mut value: Signal<String>,
    #[props(default = "YYYY-MM-DD HH:MM".to_string())] placeholder: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut error_message = use_signal(|| None::<String>);

    let mut validate = move |input: &str| {
        error_message.set(parse_schedule(input, Utc::now()).err());
    };

    rsx! {
        div {
            class: "flex flex-col gap-1",
            input {
                r#type: "text",
                class: if error_message().is_none() {
                    "input input-bordered w-full"
                } else {
                    "input input-bordered input-error w-full"
                },
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                maxlength: 16,
                oninput: move |e| {
                    let new_value = e.value();
                    validate(&new_value);
                    value.set(new_value);
                },
                onblur: move |_| validate(&value()),
            }
            if let Some(message) = error_message() {
                div { class: "text-xs text-error mt-1", "{message}" }
            }
            div {
                class: "text-xs opacity-60 mt-1",
                "UTC, 24-hour time. Leave empty to post right away."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_future_schedule() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

        assert_eq!(parse_schedule("", now), Ok(None));
        assert_eq!(
            parse_schedule("2025-01-02 08:30", now),
            Ok(Some(Utc.with_ymd_and_hms(2025, 1, 2, 8, 30, 0).unwrap()))
        );
        assert!(parse_schedule("2024-12-31 23:59", now).is_err());
        assert!(parse_schedule("tomorrow", now).is_err());
    }
}
