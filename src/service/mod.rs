pub mod dispatch;
pub mod formatter;
pub mod relay;

#[cfg(test)]
mod test;
