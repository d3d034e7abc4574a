use serde::{Deserialize, Serialize};

use super::text::{TransportText, text_or_empty};
use crate::domain::{ErrorCode, RecipientResult, Request, SendResponse};

/// Replaces `login` and `psw` when a request is echoed back in an error.
pub const REDACTED: &str = "[redacted]";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct SendJsonRequest<'a> {
    login: &'a str,
    psw: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    phones: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    mes: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    list: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    sender: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    translit: i32,
    #[serde(skip_serializing_if = "is_unset")]
    tinyurl: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    time: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    tz: i32,
    #[serde(skip_serializing_if = "is_unset_f64")]
    period: f64,
    #[serde(skip_serializing_if = "is_unset")]
    freq: i32,
    #[serde(skip_serializing_if = "is_unset")]
    flash: i32,
    #[serde(skip_serializing_if = "is_unset")]
    bin: i32,
    #[serde(skip_serializing_if = "is_unset")]
    push: i32,
    #[serde(skip_serializing_if = "is_unset")]
    hlr: i32,
    #[serde(skip_serializing_if = "is_unset")]
    ping: i32,
    #[serde(skip_serializing_if = "is_unset")]
    mms: i32,
    #[serde(skip_serializing_if = "is_unset")]
    mail: i32,
    #[serde(skip_serializing_if = "is_unset")]
    soc: i32,
    #[serde(skip_serializing_if = "is_unset")]
    viber: i32,
    #[serde(skip_serializing_if = "is_unset")]
    whatsapp: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    bot: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    smsreq: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    fileurl: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    call: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    voice: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    param: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    subj: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    charset: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    cost: i32,
    #[serde(skip_serializing_if = "is_unset")]
    fmt: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    valid: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    maxsms: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    imgcode: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    userip: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    err: i32,
    #[serde(skip_serializing_if = "is_unset")]
    op: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    pp: &'a str,
}

fn is_unset(value: &i32) -> bool {
    *value == 0
}

fn is_unset_f64(value: &f64) -> bool {
    *value == 0.0
}

impl<'a> SendJsonRequest<'a> {
    fn new(request: &'a Request, login: &'a str, psw: &'a str) -> Self {
        Self {
            login,
            psw,
            phones: &request.phones,
            mes: &request.message,
            list: &request.list,
            id: &request.id,
            sender: &request.sender,
            translit: request.translit,
            tinyurl: request.tinyurl,
            time: &request.time,
            tz: request.tz,
            period: request.period,
            freq: request.freq,
            flash: request.flash,
            bin: request.bin,
            push: request.push,
            hlr: request.hlr,
            ping: request.ping,
            mms: request.mms,
            mail: request.mail,
            soc: request.soc,
            viber: request.viber,
            whatsapp: request.whatsapp,
            bot: &request.bot,
            smsreq: request.smsreq,
            fileurl: &request.fileurl,
            call: request.call,
            voice: &request.voice,
            param: &request.param,
            subj: &request.subject,
            charset: &request.charset,
            cost: request.cost,
            fmt: request.format,
            valid: &request.valid,
            maxsms: request.max_sms,
            imgcode: &request.img_code,
            userip: &request.user_ip,
            err: request.err,
            op: request.op,
            pp: &request.pp,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    cnt: i32,
    #[serde(default)]
    cost: Option<TransportText>,
    #[serde(default)]
    balance: Option<TransportText>,
    #[serde(default)]
    error: Option<TransportText>,
    #[serde(default)]
    error_code: i32,
    #[serde(default)]
    phones: Option<Vec<RecipientJsonResult>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RecipientJsonResult {
    #[serde(default)]
    phone: Option<TransportText>,
    #[serde(default)]
    mccmnc: Option<TransportText>,
    #[serde(default)]
    cost: Option<TransportText>,
    #[serde(default)]
    status: Option<TransportText>,
    #[serde(default)]
    error: Option<TransportText>,
}

pub fn encode_send_json(request: &Request) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SendJsonRequest::new(
        request,
        &request.login,
        &request.password,
    ))
}

/// Same as [`encode_send_json`] with both credentials replaced by [`REDACTED`].
pub fn encode_send_json_redacted(request: &Request) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SendJsonRequest::new(request, REDACTED, REDACTED))
}

pub fn decode_send_json_response(json: &str) -> Result<SendResponse, TransportError> {
    let parsed: SendJsonResponse = serde_json::from_str(json)?;

    let phones = parsed
        .phones
        .unwrap_or_default()
        .into_iter()
        .map(|value| RecipientResult {
            phone: text_or_empty(value.phone),
            mccmnc: text_or_empty(value.mccmnc),
            cost: text_or_empty(value.cost),
            status: text_or_empty(value.status),
            error: text_or_empty(value.error),
        })
        .collect();

    Ok(SendResponse {
        id: parsed.id,
        cnt: parsed.cnt,
        cost: text_or_empty(parsed.cost),
        balance: text_or_empty(parsed.balance),
        error: text_or_empty(parsed.error),
        error_code: ErrorCode::new(parsed.error_code),
        phones,
    })
}
