pub(crate) mod add_marker_label;
pub(crate) mod remove_marker_label;

pub use add_marker_label::AddMarkerLabelInterface;
pub use remove_marker_label::RemoveMarkerLabelInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    add_marker_label::MockAddMarkerLabelInterface,
    remove_marker_label::MockRemoveMarkerLabelInterface,
};
