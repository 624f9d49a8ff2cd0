// src/gui/worker.rs
//
// Background jobs. The UI thread spawns one, keeps the receiver, and drains it
// once per frame. Workers never touch the store; they only send results back
// and write progress into the shared status line.

use std::{
    sync::{Arc, Mutex, mpsc},
    thread,
};

use eframe::egui;

use crate::{
    config::options::BackendOptions,
    core::net::{Backend, SubmitResponse},
    error::Result,
    model::Profile,
};

pub type Status = Arc<Mutex<String>>;

pub enum JobResult {
    Fetched(Result<Vec<Profile>>),
    Submitted(Result<SubmitResponse>),
}

/// Replace the status text. A poisoned lock still gets written.
pub fn set_status(status: &Status, msg: impl Into<String>) {
    let mut guard = status.lock().unwrap_or_else(|p| p.into_inner());
    *guard = msg.into();
}

pub fn read_status(status: &Status) -> String {
    status.lock().unwrap_or_else(|p| p.into_inner()).clone()
}

/// `GET /profiles` on a worker thread.
pub fn spawn_fetch(
    ctx: &egui::Context,
    opts: &BackendOptions,
    status: Status,
) -> mpsc::Receiver<JobResult> {
    let (tx, rx) = mpsc::channel();
    let ctx = ctx.clone();
    let backend = Backend::new(opts);

    thread::spawn(move || {
        set_status(&status, "Fetching profiles…");
        let _ = tx.send(JobResult::Fetched(backend.fetch_profiles()));
        ctx.request_repaint();
    });
    rx
}

/// `POST /update-urls`, then re-fetch on success so the table reflects the backend.
pub fn spawn_submit(
    ctx: &egui::Context,
    opts: &BackendOptions,
    urls: Vec<String>,
    status: Status,
) -> mpsc::Receiver<JobResult> {
    let (tx, rx) = mpsc::channel();
    let ctx = ctx.clone();
    let backend = Backend::new(opts);

    thread::spawn(move || {
        set_status(&status, format!("Submitting {} URL(s)…", urls.len()));
        let submitted = backend.submit_urls(&urls);
        let ok = submitted.is_ok();
        let _ = tx.send(JobResult::Submitted(submitted));
        ctx.request_repaint();

        if ok {
            set_status(&status, "Refreshing profiles…");
            let _ = tx.send(JobResult::Fetched(backend.fetch_profiles()));
            ctx.request_repaint();
        }
    });
    rx
}
