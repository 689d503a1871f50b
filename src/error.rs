use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConvertError {
    /// Sharing is not enabled on the source map (HTTP 403).
    MapPermissionDenied,
    /// No map exists for the given id (HTTP 404).
    MapNotFound,
    /// The KML export answered with an unexpected HTTP status.
    FetchStatus(u16),
    /// The request never produced an HTTP response.
    Transport(reqwest::Error),
    XmlParse(quick_xml::Error),
    CreateDir { path: PathBuf, source: io::Error },
    WriteFile { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Process exit code for this error. Fetch failures keep the HTTP
    /// status they were caused by; 9 and 10 match the original tool's
    /// directory-creation and file-write codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MapPermissionDenied => 403,
            Self::MapNotFound => 404,
            Self::FetchStatus(status) => i32::from(*status),
            Self::Transport(_) => 1,
            Self::XmlParse(_) => 3,
            Self::CreateDir { .. } => 9,
            Self::WriteFile { .. } => 10,
        }
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MapPermissionDenied => {
                write!(f, "403: share permission for the map is not set")
            }
            Self::MapNotFound => write!(f, "404: bad map id value"),
            Self::FetchStatus(status) => {
                write!(f, "unexpected HTTP status {status} fetching map KML")
            }
            Self::Transport(e) => write!(f, "KML request failed: {e}"),
            Self::XmlParse(e) => write!(f, "KML parse error: {e}"),
            Self::CreateDir { path, source } => {
                write!(f, "cannot create output directory {}: {source}", path.display())
            }
            Self::WriteFile { path, source } => {
                write!(f, "cannot write GPX file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::XmlParse(e) => Some(e),
            Self::CreateDir { source, .. } | Self::WriteFile { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for ConvertError {
    fn from(e: quick_xml::Error) -> Self {
        Self::XmlParse(e)
    }
}
