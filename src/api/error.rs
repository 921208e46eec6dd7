use crate::view;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::io::Cursor;

#[derive(Debug, Clone)]
pub enum Error {
    ApiError(String),
    UnexpectedApiResponse,
    InvalidResponse(String, String),
    RateExceeded(String),
    RenderError(String),
    FormatError,
    InternalError,
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        log::warn!("Responding with error: {:?}", self);

        /* Only the rate limit message is shown; everything else stays in the log */
        let (status, page) = match &self {
            Error::RateExceeded(s) => (
                Status::TooManyRequests,
                view::error("429 Too Many Requests", Some(s.as_str())),
            ),
            _ => (
                Status::InternalServerError,
                view::error("Unknown exception", None),
            ),
        };

        let page = page.or(Err(Status::InternalServerError))?;

        Response::build()
            .status(status)
            .sized_body(page.len(), Cursor::new(page))
            .header(ContentType::HTML)
            .ok()
    }
}
