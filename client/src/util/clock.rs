//! Today's calendar date.
//!
//! The browser's local date is what the user sees in the date picker, so
//! hydrate reads it from `js_sys::Date`; SSR falls back to the UTC date.

use clinic::booking::Date;

pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        let month = u8::try_from(now.get_month() + 1).unwrap_or(1);
        let day = u8::try_from(now.get_date()).unwrap_or(1);
        clinic::booking::date_from_parts(year, month, day).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
