pub trait OptionExt<T> {
  fn unpack(self) -> T;

  fn unpack_ref(&self) -> &T;
}

impl<T> OptionExt<T> for Option<T> {
  /// Similar to `unwrap`, but with a more descriptive panic message.
  fn unpack(self) -> T {
    self.map_or_else(
      || {
        let type_name = std::any::type_name::<T>();
        panic!("Got `None` value when calling `OptionExt::unpack()` on `Option<{type_name}>`")
      },
      |v| v,
    )
  }

  /// Shorthand for `self.as_ref().unpack()`.
  fn unpack_ref(&self) -> &T {
    self.as_ref().unpack()
  }
}
