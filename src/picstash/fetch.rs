//! HTTP download for the ingest flow.
//!
//! Redirects are disabled on the client; the 301/302 loop below is the only
//! redirect handling, so the hop bound and the Referer policy stay in one
//! place. The response body streams straight to the slot's temp file.

use crate::config::PicstashConfig;
use crate::error::{PicstashError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, LOCATION, REFERER, USER_AGENT};
use reqwest::{StatusCode, Url};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

// Some image hosts refuse clients that don't look like a browser.
// Request-shaping only; disabled via the browser_headers config key.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str = "image/avif,image/webp,image/apng,image/*,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

pub struct Fetcher {
    client: Client,
    max_redirects: usize,
    browser_headers: bool,
}

impl Fetcher {
    pub fn new(
        timeout: Option<Duration>,
        max_redirects: usize,
        browser_headers: bool,
    ) -> Result<Self> {
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout).connect_timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            max_redirects,
            browser_headers,
        })
    }

    pub fn from_config(config: &PicstashConfig) -> Result<Self> {
        let timeout = match config.fetch_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(timeout, config.max_redirects, config.browser_headers)
    }

    /// Download `source_url` into `dest`, following 301/302 redirects up to
    /// the configured hop bound.
    ///
    /// Any other non-2xx status fails with the status code. On a body write
    /// failure the partial file is removed best-effort.
    pub fn download(&self, source_url: &str, dest: &Path) -> Result<()> {
        let mut url = Url::parse(source_url).map_err(|e| {
            PicstashError::Fetch(format!("invalid URL '{}': {}", source_url, e))
        })?;

        let mut hops = 0;
        loop {
            let mut request = self.client.get(url.clone());
            if self.browser_headers {
                request = request
                    .header(USER_AGENT, BROWSER_USER_AGENT)
                    .header(ACCEPT, BROWSER_ACCEPT)
                    .header(ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE)
                    .header(REFERER, url.as_str());
            }
            let mut response = request.send()?;

            let status = response.status();
            if status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::FOUND {
                hops += 1;
                if hops > self.max_redirects {
                    return Err(PicstashError::RedirectLoop(self.max_redirects));
                }
                url = redirect_target(&response)?;
                continue;
            }

            if !status.is_success() {
                return Err(PicstashError::FetchStatus(status.as_u16()));
            }

            return write_body(&mut response, dest);
        }
    }
}

fn redirect_target(response: &Response) -> Result<Url> {
    let location = response
        .headers()
        .get(LOCATION)
        .ok_or_else(|| PicstashError::Fetch("redirect without a Location header".to_string()))?;
    let location = location
        .to_str()
        .map_err(|_| PicstashError::Fetch("redirect Location is not valid UTF-8".to_string()))?;
    // Location may be relative; resolve against the URL that redirected us
    response.url().join(location).map_err(|e| {
        PicstashError::Fetch(format!("invalid redirect target '{}': {}", location, e))
    })
}

fn write_body(response: &mut Response, dest: &Path) -> Result<()> {
    let mut file = fs::File::create(dest).map_err(|e| {
        PicstashError::Write(format!("cannot create {}: {}", dest.display(), e))
    })?;
    if let Err(e) = io::copy(response, &mut file) {
        drop(file);
        let _ = fs::remove_file(dest);
        return Err(PicstashError::Write(format!(
            "while saving {}: {}",
            dest.display(),
            e
        )));
    }
    Ok(())
}
