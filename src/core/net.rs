// src/core/net.rs
//
// Blocking client for the two backend endpoints. Runs on a worker thread in
// the GUI and inline in the CLI. No retries.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{
    config::options::BackendOptions,
    error::Result,
    model::{self, Profile},
};

const USER_AGENT: &str = concat!("profile_dash/", env!("CARGO_PKG_VERSION"));

/// What `POST /update-urls` answers on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub count: usize,
}

#[derive(Serialize)]
struct UrlBatch<'a> {
    urls: &'a [String],
}

#[derive(Clone, Debug)]
pub struct Backend {
    profiles_url: String,
    update_urls_url: String,
    agent: ureq::Agent,
}

impl Backend {
    pub fn new(opts: &BackendOptions) -> Self {
        Self {
            profiles_url: opts.profiles_url(),
            update_urls_url: opts.update_urls_url(),
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
        }
    }

    /// `GET /profiles`: the full record set.
    pub fn fetch_profiles(&self) -> Result<Vec<Profile>> {
        logd!("Net: GET {}", self.profiles_url);
        // Unpaginated; can outgrow into_string's 10 MB ceiling.
        let resp = self.agent.get(&self.profiles_url).call()?;
        let profiles = model::read_profiles(resp.into_reader())?;
        logf!("Net: fetched {} profile(s)", profiles.len());
        Ok(profiles)
    }

    /// `POST /update-urls` with `{"urls": [...]}`.
    ///
    /// A 2xx is success. If the body isn't the usual `{message, count}` we
    /// still succeed and report the batch size ourselves.
    pub fn submit_urls(&self, urls: &[String]) -> Result<SubmitResponse> {
        logd!("Net: POST {} ({} url(s))", self.update_urls_url, urls.len());
        let mut body = Vec::new();
        self.agent
            .post(&self.update_urls_url)
            .send_json(UrlBatch { urls })?
            .into_reader()
            .read_to_end(&mut body)?;

        let resp = serde_json::from_slice::<SubmitResponse>(&body).unwrap_or_else(|_| {
            logd!(
                "Net: unexpected update-urls body, treating as ok: {:?}",
                String::from_utf8_lossy(&body)
            );
            SubmitResponse { message: s!("URLs submitted"), count: urls.len() }
        });
        logf!("Net: submit ok ({}): {}", resp.count, resp.message);
        Ok(resp)
    }
}
