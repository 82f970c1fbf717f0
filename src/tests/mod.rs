pub mod util;

#[cfg(test)]
mod format;
