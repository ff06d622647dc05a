pub trait ConfigProvider: Send + Sync {
    /// The numeral tokens to sum, in caller order.
    fn numerals(&self) -> &[String];
}
