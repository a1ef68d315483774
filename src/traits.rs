pub trait Indexable {
  fn id(&self) -> u64;
}
