mod notice;
mod session;
mod summary;

pub use notice::NoticeBanner;
pub use session::SessionView;
pub use summary::SummaryView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
