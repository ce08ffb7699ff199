pub mod appearance;
pub mod linux;
pub mod macos;
pub mod theme_probe;
pub mod windows;

#[cfg(test)]
pub(crate) mod test_support;
