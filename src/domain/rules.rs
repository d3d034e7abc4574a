//! Field checks run before a [`Request`] is sent.
//!
//! Required checks short-circuit. Optional checks are independent predicates
//! evaluated in a fixed order over the same immutable request.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::request::Request;
use crate::domain::validation::ValidationError;

/// Longest accepted `mes`, in characters.
pub const MESSAGE_MAX_CHARS: usize = 1000;
/// Shortest accepted `fileurl`, in characters.
pub const FILE_URL_MIN_CHARS: usize = 101;
/// Accepted `voice` values.
pub const VOICES: [&str; 8] = ["m", "m2", "m3", "m4", "w", "w2", "w3", "w4"];

const PERIOD_MIN_HOURS: f64 = 0.1;
const PERIOD_MAX_HOURS: f64 = 720.0;

// Digits are ASCII only; `\d` would also match other Unicode decimal digits.
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{2} [0-9]{1,2}:[0-9]{2}$").unwrap());
static HOUR_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,2}-[0-9]{1,2}$").unwrap());
static SECONDS_FROM_NOW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+ts$").unwrap());
static HOURS_FROM_NOW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[0-9]+$").unwrap());
static LIFETIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").unwrap());
static VOICE_PARAMS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+,[0-9]+,[0-9]+$").unwrap());

type Check = fn(&Request) -> Result<(), ValidationError>;

const OPTIONAL_CHECKS: &[Check] = &[
    check_time,
    check_cost,
    check_format,
    check_lifetime_format,
    check_max_sms,
    check_tz,
    check_period,
    check_freq,
    check_flash,
    check_bin,
    check_push,
    check_hlr,
    check_ping,
    check_mms,
    check_mail,
    check_soc,
    check_viber,
    check_whatsapp,
    check_smsreq,
    check_fileurl,
    check_call,
    check_voice,
    check_param,
    check_lifetime,
];

impl Request {
    /// Check the request against the gateway's documented field domains.
    ///
    /// Required fields are checked first:
    /// - `login` and `password` are non-empty,
    /// - `phones` or `list` is non-empty,
    /// - `message` or `list` is non-empty,
    /// - `message` is at most [`MESSAGE_MAX_CHARS`] characters.
    ///
    /// Then every optional field is checked in declaration order and the first
    /// violation is returned. Zero and empty values are "unset" and pass, except
    /// `mms`, `mail`, `soc`, `viber`, `whatsapp` and `call`, which are always
    /// range-checked.
    ///
    /// `time` accepts `DDMMYYhhmm`, `DD.MM.YY hh:mm`, `h1-h2`, `<seconds>ts` and
    /// `+<hours>`. `valid` must look like `hh:mm` and, unless it is `"0"`, have
    /// an hour in `1..=24` and minutes in `0..=59`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required(self)?;
        OPTIONAL_CHECKS.iter().try_for_each(|check| check(self))
    }

    /// Every violation [`Request::validate`] would report, in the same order.
    ///
    /// A failing required check is reported alone, since optional checks only
    /// run once the required fields are in place.
    pub fn violations(&self) -> Vec<ValidationError> {
        if let Err(err) = check_required(self) {
            return vec![err];
        }
        OPTIONAL_CHECKS
            .iter()
            .filter_map(|check| check(self).err())
            .collect()
    }
}

fn check_required(r: &Request) -> Result<(), ValidationError> {
    if r.login.is_empty() || r.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if r.phones.is_empty() && r.list.is_empty() {
        return Err(ValidationError::MissingRecipients);
    }
    if r.list.is_empty() && r.message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    let chars = r.message.chars().count();
    if chars > MESSAGE_MAX_CHARS {
        return Err(ValidationError::MessageTooLong {
            max: MESSAGE_MAX_CHARS,
            actual: chars,
        });
    }
    Ok(())
}

fn in_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(ValidationError::OutOfRange {
        field,
        min,
        max,
        actual: value,
    })
}

fn in_range_if_set(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<(), ValidationError> {
    if value == 0 {
        return Ok(());
    }
    in_range(field, value, min, max)
}

fn is_send_time(input: &str) -> bool {
    let compact = input.len() == 10
        && input.bytes().all(|b| b.is_ascii_digit())
        && NaiveDateTime::parse_from_str(input, "%d%m%y%H%M").is_ok();

    let dotted = DAY_MONTH_YEAR.is_match(input)
        && NaiveDateTime::parse_from_str(input, "%d.%m.%y %H:%M").is_ok();

    compact
        || dotted
        || HOUR_SPAN.is_match(input)
        || SECONDS_FROM_NOW.is_match(input)
        || HOURS_FROM_NOW.is_match(input)
}

fn check_time(r: &Request) -> Result<(), ValidationError> {
    if r.time.is_empty() || is_send_time(&r.time) {
        return Ok(());
    }
    Err(ValidationError::InvalidTime {
        input: r.time.clone(),
    })
}

fn check_cost(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("cost", r.cost, 0, 3)
}

fn check_format(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("fmt", r.format, 0, 3)
}

fn check_lifetime_format(r: &Request) -> Result<(), ValidationError> {
    if r.valid.is_empty() || LIFETIME.is_match(&r.valid) {
        return Ok(());
    }
    Err(ValidationError::InvalidLifetimeFormat {
        input: r.valid.clone(),
    })
}

fn check_max_sms(r: &Request) -> Result<(), ValidationError> {
    if r.max_sms < 0 {
        return Err(ValidationError::NegativeMaxSms { actual: r.max_sms });
    }
    Ok(())
}

fn check_tz(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("tz", r.tz, -12, 12)
}

fn check_period(r: &Request) -> Result<(), ValidationError> {
    if r.period == 0.0 || (PERIOD_MIN_HOURS..=PERIOD_MAX_HOURS).contains(&r.period) {
        return Ok(());
    }
    Err(ValidationError::PeriodOutOfRange {
        min: PERIOD_MIN_HOURS,
        max: PERIOD_MAX_HOURS,
        actual: r.period,
    })
}

fn check_freq(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("freq", r.freq, 1, 1440)
}

fn check_flash(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("flash", r.flash, 0, 1)
}

fn check_bin(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("bin", r.bin, 0, 2)
}

fn check_push(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("push", r.push, 0, 1)
}

fn check_hlr(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("hlr", r.hlr, 0, 1)
}

fn check_ping(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("ping", r.ping, 0, 1)
}

fn check_mms(r: &Request) -> Result<(), ValidationError> {
    in_range("mms", r.mms, 0, 1)
}

fn check_mail(r: &Request) -> Result<(), ValidationError> {
    in_range("mail", r.mail, 0, 1)
}

fn check_soc(r: &Request) -> Result<(), ValidationError> {
    in_range("soc", r.soc, 0, 1)
}

fn check_viber(r: &Request) -> Result<(), ValidationError> {
    in_range("viber", r.viber, 0, 1)
}

fn check_whatsapp(r: &Request) -> Result<(), ValidationError> {
    in_range("whatsapp", r.whatsapp, 0, 1)
}

fn check_smsreq(r: &Request) -> Result<(), ValidationError> {
    in_range_if_set("smsreq", r.smsreq, 10, 999)
}

// Length of the URL itself; the gateway documents a 101 byte minimum file size.
fn check_fileurl(r: &Request) -> Result<(), ValidationError> {
    let chars = r.fileurl.chars().count();
    if r.fileurl.is_empty() || chars >= FILE_URL_MIN_CHARS {
        return Ok(());
    }
    Err(ValidationError::FileUrlTooShort {
        min: FILE_URL_MIN_CHARS,
        actual: chars,
    })
}

fn check_call(r: &Request) -> Result<(), ValidationError> {
    in_range("call", r.call, 0, 1)
}

fn check_voice(r: &Request) -> Result<(), ValidationError> {
    if r.voice.is_empty() || VOICES.contains(&r.voice.as_str()) {
        return Ok(());
    }
    Err(ValidationError::InvalidVoice {
        input: r.voice.clone(),
    })
}

fn check_param(r: &Request) -> Result<(), ValidationError> {
    if r.param.is_empty() || VOICE_PARAMS.is_match(&r.param) {
        return Ok(());
    }
    Err(ValidationError::InvalidVoiceParams {
        input: r.param.clone(),
    })
}

fn check_lifetime(r: &Request) -> Result<(), ValidationError> {
    if r.valid.is_empty() || r.valid == "0" {
        return Ok(());
    }

    let (hour, minute) = r
        .valid
        .split_once(':')
        .and_then(|(hour, minute)| {
            Some((hour.parse::<u32>().ok()?, minute.parse::<u32>().ok()?))
        })
        .ok_or_else(|| ValidationError::InvalidLifetime {
            input: r.valid.clone(),
        })?;

    if !(1..=24).contains(&hour) || minute > 59 {
        return Err(ValidationError::LifetimeOutOfRange { hour, minute });
    }
    Ok(())
}
