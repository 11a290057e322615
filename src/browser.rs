use std::io;

/// Hands a finished URL to something that can show it
pub trait UrlOpener {
    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs in the user's configured browser
#[derive(Debug, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open_url(&self, url: &str) -> io::Result<()> {
        log::debug!("opening {} in system browser", url);
        open::that(url)
    }
}

/// Dry run: prints the URL instead of launching anything
#[derive(Debug, Default)]
pub struct PrintOpener;

impl UrlOpener for PrintOpener {
    fn open_url(&self, url: &str) -> io::Result<()> {
        println!("{}", url);
        Ok(())
    }
}

pub fn opener_for(dry_run: bool) -> Box<dyn UrlOpener> {
    if dry_run {
        Box::new(PrintOpener)
    } else {
        Box::new(SystemOpener)
    }
}
