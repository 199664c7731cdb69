pub type Result<T> = core::result::Result<T, Error>;

pub const INVALID_RESOURCE_MESSAGE: &str = "Invalid URL or unsupported resource type";

pub struct Error {
    inner: Box<ErrorKind>
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Box::new(kind)
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }

    pub fn invalid_resource() -> Self {
        Self::new(ErrorKind::InvalidResource)
    }

    pub fn is_invalid_resource(&self) -> bool {
        matches!(*self.inner, ErrorKind::InvalidResource)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::new(ErrorKind::StdIoError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(e: handlebars::RenderError) -> Self {
        Error::new(ErrorKind::HandlebarsRenderError(e))
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(e: handlebars::TemplateError) -> Self {
        Error::new(ErrorKind::HandlebarsTemplateError(e))
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Error::new(ErrorKind::RegexError(e))
    }
}

impl From<dotenvy::Error> for Error {
    fn from(e: dotenvy::Error) -> Self {
        Error::new(ErrorKind::DotenvError(e))
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::new(ErrorKind::CrumbfetchError(e))
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::new(ErrorKind::CrumbfetchError(e.to_string()))
    }
}

pub enum ErrorKind {
    /// The URL carries no recognised resource segment.
    InvalidResource,
    CrumbfetchError(String),
    ReqwestError(reqwest::Error),
    StdIoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    HandlebarsRenderError(handlebars::RenderError),
    HandlebarsTemplateError(handlebars::TemplateError),
    RegexError(regex::Error),
    DotenvError(dotenvy::Error),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidResource => write!(f, "InvalidResource"),
            ErrorKind::CrumbfetchError(e) => write!(f, "{}", e),
            ErrorKind::ReqwestError(e) => write!(f, "{:?}", e),
            ErrorKind::StdIoError(e) => write!(f, "{:?}", e),
            ErrorKind::SerdeJsonError(e) => write!(f, "{:?}", e),
            ErrorKind::HandlebarsRenderError(e) => write!(f, "{:?}", e),
            ErrorKind::HandlebarsTemplateError(e) => write!(f, "{:?}", e),
            ErrorKind::RegexError(e) => write!(f, "{:?}", e),
            ErrorKind::DotenvError(e) => write!(f, "{:?}", e),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidResource => write!(f, "{}", INVALID_RESOURCE_MESSAGE),
            ErrorKind::CrumbfetchError(e) => write!(f, "{}", e),
            ErrorKind::ReqwestError(e) => write!(f, "{}", e),
            ErrorKind::StdIoError(e) => write!(f, "{}", e),
            ErrorKind::SerdeJsonError(e) => write!(f, "{}", e),
            ErrorKind::HandlebarsRenderError(e) => write!(f, "{}", e),
            ErrorKind::HandlebarsTemplateError(e) => write!(f, "{}", e),
            ErrorKind::RegexError(e) => write!(f, "{}", e),
            ErrorKind::DotenvError(e) => write!(f, ".env: {}", e),
        }
    }
}
