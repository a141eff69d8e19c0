pub mod browser;

#[cfg(test)]
pub mod test;
