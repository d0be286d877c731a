use crate::value::Value;
use crate::OutputRef;

/// An unspent output as reported by the node, immutable once queried.
///
/// Consumption is modeled by membership in a selection, never by mutating
/// the output itself.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnspentOutput {
    pub reference: OutputRef,
    pub value: Value,
}

impl UnspentOutput {
    pub fn new(reference: OutputRef, value: Value) -> Self {
        Self { reference, value }
    }

    pub fn is_ada_only(&self) -> bool {
        self.value.contains_only_ada()
    }
}
