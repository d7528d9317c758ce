use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Wiki {
    base: Url,
    client: Client,
}

impl Wiki {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(Error::InvalidUrl)?;
        let client = Client::new();

        Ok(Self { base, client })
    }

    pub fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("fetch_page: {}", url);

        let res = self
            .client
            .get(url)
            .send()
            .map_err(Error::PageRequestFailed)?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::PageStatus(status));
        }

        res.text().map_err(Error::PageRequestFailed)
    }

    pub fn resolve(&self, src: &str) -> Result<Url> {
        self.base.join(src).map_err(Error::InvalidUrl)
    }

    pub fn fetch_image(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("fetch_image: {}", url);

        let res = self
            .client
            .get(url.clone())
            .send()
            .map_err(Error::ImageRequestFailed)?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::ImageStatus(status));
        }

        let bytes = res.bytes().map_err(Error::ImageRequestFailed)?;
        Ok(bytes.to_vec())
    }
}
