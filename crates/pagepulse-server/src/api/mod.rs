// ABOUTME: API handler modules for the pagepulse HTTP surface.
// ABOUTME: track handles pageview ingest; live streams the running count over SSE.

pub mod live;
pub mod track;
