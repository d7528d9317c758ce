use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    PageRequestFailed(reqwest::Error),
    PageStatus(reqwest::StatusCode),

    ImageRequestFailed(reqwest::Error),
    ImageStatus(reqwest::StatusCode),

    InvalidUrl(url::ParseError),

    CreateOutputDir(std::io::Error),
    WriteImage(PathBuf, std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
