//! Booking-date form.
//!
//! The draft only formats what the visitor picked and hands it to the
//! caller. Nothing is reserved or stored here.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use gloo::console::warn;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::error::BookingError;

pub const ADULTS: RangeInclusive<u8> = 1..=30;
pub const CHILDREN: RangeInclusive<u8> = 0..=10;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// What the submit callback receives. Serialises as
/// `{checkInDate, checkOutDate, adults, children}`, all strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub check_in_date: String,
    pub check_out_date: String,
    pub adults: String,
    pub children: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    adults: u8,
    children: u8,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            adults: *ADULTS.start(),
            children: *CHILDREN.start(),
        }
    }
}

impl BookingDraft {
    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn adults(&self) -> u8 {
        self.adults
    }

    pub fn children(&self) -> u8 {
        self.children
    }

    /// The check-out picker stays disabled until a check-in is chosen.
    pub fn check_out_enabled(&self) -> bool {
        self.check_in.is_some()
    }

    /// Earliest selectable check-out: the night after check-in.
    pub fn min_check_out(&self) -> Option<NaiveDate> {
        self.check_in.and_then(|d| d.succ_opt())
    }

    /// Moving check-in on or past the chosen check-out drops the check-out.
    pub fn set_check_in(&mut self, date: Option<NaiveDate>) {
        self.check_in = date;
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out <= check_in => self.check_out = None,
            (None, Some(_)) => self.check_out = None,
            _ => {}
        }
    }

    pub fn set_check_out(&mut self, date: Option<NaiveDate>) -> Result<(), BookingError> {
        let Some(check_out) = date else {
            self.check_out = None;
            return Ok(());
        };
        let check_in = self.check_in.ok_or(BookingError::CheckOutWithoutCheckIn)?;
        if check_out <= check_in {
            return Err(BookingError::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            });
        }
        self.check_out = Some(check_out);
        Ok(())
    }

    pub fn set_adults(&mut self, count: i64) {
        self.adults = clamp_to(count, &ADULTS);
    }

    pub fn set_children(&mut self, count: i64) {
        self.children = clamp_to(count, &CHILDREN);
    }

    /// Stepper text from the input. Returns false (keeping the old value)
    /// when the text is not a number.
    pub fn set_adults_text(&mut self, text: &str) -> bool {
        parse_count(text).map(|n| self.set_adults(n)).is_some()
    }

    pub fn set_children_text(&mut self, text: &str) -> bool {
        parse_count(text).map(|n| self.set_children(n)).is_some()
    }

    pub fn request(&self) -> BookingRequest {
        BookingRequest {
            check_in_date: self.check_in.map(format_date).unwrap_or_default(),
            check_out_date: self.check_out.map(format_date).unwrap_or_default(),
            adults: self.adults.to_string(),
            children: self.children.to_string(),
        }
    }
}

fn clamp_to(count: i64, range: &RangeInclusive<u8>) -> u8 {
    count.clamp(i64::from(*range.start()), i64::from(*range.end())) as u8
}

fn parse_count(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Value of an `<input type="date">`: empty clears, anything else must be ISO.
pub fn parse_date_input(text: &str) -> Result<Option<NaiveDate>, BookingError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|_| BookingError::InvalidDate(text.to_string()))
}

/// Local calendar date in the browser.
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JS months are 0-11
        now.get_date(),
    )
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    #[prop_or_default]
    pub class: Classes,
    pub on_submit: Callback<BookingRequest>,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    // Events can arrive back to back between renders, so every handler edits
    // the one live draft rather than the snapshot it was rendered with.
    let draft = use_mut_ref(BookingDraft::default);
    let redraw = use_force_update();
    let today = use_memo((), |_| today());

    let edit = |apply: fn(&mut BookingDraft, &HtmlInputElement)| {
        let draft = draft.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            apply(&mut draft.borrow_mut(), &input);
            redraw.force_update();
        })
    };

    let on_check_in = edit(|draft, input| match parse_date_input(&input.value()) {
        Ok(date) => draft.set_check_in(date),
        Err(e) => warn!(format!("booking: {e}")),
    });
    let on_check_out = edit(|draft, input| {
        if let Err(e) = parse_date_input(&input.value()).and_then(|date| draft.set_check_out(date)) {
            warn!(format!("booking: {e}"));
            // put the rejected value back to what the draft holds
            input.set_value(&draft.check_out().map(format_date).unwrap_or_default());
        }
    });
    let on_adults = edit(|draft, input| {
        draft.set_adults_text(&input.value());
        input.set_value(&draft.adults().to_string());
    });
    let on_children = edit(|draft, input| {
        draft.set_children_text(&input.value());
        input.set_value(&draft.children().to_string());
    });

    let onsubmit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = draft.borrow().request();
            on_submit.emit(request);
        })
    };

    let draft = draft.borrow().clone();
    let min_check_in = (*today).map(format_date).unwrap_or_default();
    let min_check_out = draft
        .min_check_out()
        .or(*today)
        .map(format_date)
        .unwrap_or_default();
    let field = "w-full h-[50px] px-5 py-2 bg-[#161616] border border-[#2e2e2e] text-white";

    html! {
      <div class={classes!("bg-[#161616]", "absolute", "left-0", "bottom-0", "w-4/5", "max-w-[1240px]", "z-40", "font-jost", props.class.clone())}>
        <form {onsubmit} class="flex flex-wrap md:flex-nowrap items-center p-4 md:p-6 lg:p-8 pr-16 lg:pr-36">
          <p class="sr-only"><small>{ "Les champs obligatoires sont suivis de *" }</small></p>

          <div class="w-full md:w-1/4 px-2 mb-4 md:mb-0 relative">
            <label for="check-in-date" class="block text-[#adaaa4] mb-1">
              { "Arrivée " }<span class="sr-only">{ "*" }</span>
            </label>
            <input id="check-in-date" type="date" required={true}
                   min={min_check_in}
                   value={draft.check_in().map(format_date).unwrap_or_default()}
                   onchange={on_check_in}
                   class={classes!(field, "cursor-pointer")} />
          </div>

          <div class="w-full md:w-1/4 px-2 mb-4 md:mb-0 relative">
            <label for="check-out-date" class="block text-[#adaaa4] mb-1">
              { "Départ " }<span class="sr-only">{ "*" }</span>
            </label>
            <input id="check-out-date" type="date" required={true}
                   min={min_check_out}
                   disabled={!draft.check_out_enabled()}
                   value={draft.check_out().map(format_date).unwrap_or_default()}
                   onchange={on_check_out}
                   class={classes!(field, "cursor-pointer", "disabled:opacity-50")} />
          </div>

          <div class="w-full md:w-1/6 px-2 mb-4 md:mb-0">
            <label for="adults" class="block text-[#adaaa4] mb-1">{ "Adultes" }</label>
            <input id="adults" type="number"
                   min={ADULTS.start().to_string()} max={ADULTS.end().to_string()}
                   value={draft.adults().to_string()}
                   onchange={on_adults}
                   class={field} />
          </div>

          <div class="w-full md:w-1/6 px-2 mb-4 md:mb-0">
            <label for="children" class="block text-[#adaaa4] mb-1">{ "Enfants" }</label>
            <input id="children" type="number"
                   min={CHILDREN.start().to_string()} max={CHILDREN.end().to_string()}
                   value={draft.children().to_string()}
                   onchange={on_children}
                   class={field} />
          </div>

          <div class="w-full md:w-auto px-2 ml-auto md:absolute md:right-0 md:top-0 md:h-full">
            <button type="submit" class="w-full md:w-[120px] h-[48px] md:h-full bg-[#b68c56] text-white hover:brightness-110 transition-all">
              { "Chercher" }
            </button>
          </div>
        </form>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn check_out_is_disabled_until_check_in() {
        let mut draft = BookingDraft::default();
        assert!(!draft.check_out_enabled());
        assert_eq!(draft.min_check_out(), None);
        assert_eq!(
            draft.set_check_out(Some(date(2025, 6, 5))),
            Err(BookingError::CheckOutWithoutCheckIn)
        );

        draft.set_check_in(Some(date(2025, 6, 1)));
        assert!(draft.check_out_enabled());
        assert_eq!(draft.min_check_out(), Some(date(2025, 6, 2)));
    }

    #[test]
    fn min_check_out_crosses_month_and_year() {
        let mut draft = BookingDraft::default();
        draft.set_check_in(Some(date(2025, 12, 31)));
        assert_eq!(draft.min_check_out(), Some(date(2026, 1, 1)));
    }

    #[test]
    fn check_out_must_follow_check_in() {
        let mut draft = BookingDraft::default();
        draft.set_check_in(Some(date(2025, 6, 10)));
        let err = draft.set_check_out(Some(date(2025, 6, 10))).unwrap_err();
        assert!(matches!(err, BookingError::CheckOutNotAfterCheckIn { .. }));
        assert_eq!(draft.check_out(), None);
    }

    #[test]
    fn moving_check_in_past_check_out_clears_it() {
        let mut draft = BookingDraft::default();
        draft.set_check_in(Some(date(2025, 6, 1)));
        draft.set_check_out(Some(date(2025, 6, 5))).unwrap();

        draft.set_check_in(Some(date(2025, 6, 3)));
        assert_eq!(draft.check_out(), Some(date(2025, 6, 5)));

        draft.set_check_in(Some(date(2025, 6, 5)));
        assert_eq!(draft.check_out(), None);
    }

    #[test]
    fn clearing_check_in_clears_check_out() {
        let mut draft = BookingDraft::default();
        draft.set_check_in(Some(date(2025, 6, 1)));
        draft.set_check_out(Some(date(2025, 6, 2))).unwrap();
        draft.set_check_in(None);
        assert_eq!(draft.check_out(), None);
        assert!(!draft.check_out_enabled());
    }

    #[test]
    fn steppers_clamp_to_bounds() {
        let mut draft = BookingDraft::default();
        draft.set_adults(0);
        assert_eq!(draft.adults(), 1);
        draft.set_adults(31);
        assert_eq!(draft.adults(), 30);
        draft.set_children(-1);
        assert_eq!(draft.children(), 0);
        draft.set_children(11);
        assert_eq!(draft.children(), 10);
        draft.set_adults(i64::MAX);
        assert_eq!(draft.adults(), 30);
    }

    #[test]
    fn stepper_text_keeps_previous_value_when_not_a_number() {
        let mut draft = BookingDraft::default();
        assert!(draft.set_adults_text(" 4 "));
        assert_eq!(draft.adults(), 4);
        assert!(!draft.set_adults_text(""));
        assert!(!draft.set_adults_text("deux"));
        assert_eq!(draft.adults(), 4);
        assert!(draft.set_children_text("99"));
        assert_eq!(draft.children(), 10);
    }

    #[test]
    fn date_inputs_parse_iso_or_clear() {
        assert_eq!(parse_date_input(""), Ok(None));
        assert_eq!(parse_date_input("2025-06-01"), Ok(Some(date(2025, 6, 1))));
        assert_eq!(
            parse_date_input("01/06/2025"),
            Err(BookingError::InvalidDate("01/06/2025".to_string()))
        );
        assert!(parse_date_input("2025-02-30").is_err());
    }

    #[test]
    fn empty_draft_submits_empty_dates() {
        let request = BookingDraft::default().request();
        assert_eq!(request.check_in_date, "");
        assert_eq!(request.check_out_date, "");
        assert_eq!(request.adults, "1");
        assert_eq!(request.children, "0");
    }

    #[test]
    fn filled_form_submits_iso_dates_and_string_counts() {
        let mut draft = BookingDraft::default();
        draft.set_check_in(parse_date_input("2025-06-01").unwrap());
        draft.set_check_out(parse_date_input("2025-06-05").unwrap()).unwrap();
        assert!(draft.set_adults_text("2"));
        assert!(draft.set_children_text("1"));

        let request = draft.request();
        assert_eq!(
            request,
            BookingRequest {
                check_in_date: "2025-06-01".into(),
                check_out_date: "2025-06-05".into(),
                adults: "2".into(),
                children: "1".into(),
            }
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "checkInDate": "2025-06-01",
                "checkOutDate": "2025-06-05",
                "adults": "2",
                "children": "1"
            })
        );
    }
}
