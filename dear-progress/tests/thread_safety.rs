use static_assertions::{assert_impl_all, assert_not_impl_any};

// Compile-time checks for Send/Sync markers
#[test]
fn widget_thread_markers() {
    // Plain value types cross threads freely
    assert_impl_all!(dear_progress::ProgressBar: Send, Sync, Clone);
    assert_impl_all!(dear_progress::Properties: Send, Sync, Clone);
    assert_impl_all!(dear_progress::ProgressDirection: Send, Sync, Copy);

    // Owned textures keep the host surface alive and stay on the UI thread
    assert_not_impl_any!(dear_progress::OwnedTexture: Send, Sync, Clone);
    assert_not_impl_any!(dear_progress::ContinuousProgressBar: Send, Sync, Clone);

    // The recording surface uses interior mutability
    assert_not_impl_any!(dear_progress::RecordingSurface: Sync);
}
