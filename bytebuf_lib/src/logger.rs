/// size of type usize
macro_rules! log_buffer_created {
    ($size:expr) => {
        log::debug!("buffer created with {} zero bytes", $size);
    };
}

/// # Arguments
/// * `old_size` - of type usize
/// * `new_size` - of type usize
macro_rules! log_buffer_resized {
    ($old_size:expr, $new_size:expr) => {
        log::debug!("buffer resized from {} to {} bytes", $old_size, $new_size);
    };
}

/// view of type crate::view::DataView
macro_rules! log_view_created {
    ($view:expr) => {
        log::trace!("created {}", $view);
    };
}

/// # Arguments
/// * `field` - of type crate::helper::range_helper::WindowField
/// * `raw` - of type Option<i64>
/// * `resolved` - of type usize
macro_rules! log_window_changed {
    ($field:expr, $raw:expr, $resolved:expr) => {
        log::trace!("view {} set to {:?} (resolved {})", $field, $raw, $resolved);
    };
}

/// # Arguments
/// * `width` - of type crate::view::Width
/// * `value` - of type i64
/// * `clamped` - of type u32
macro_rules! log_value_clamped {
    ($width:expr, $value:expr, $clamped:expr) => {
        log::trace!("{} value {} clamped to {}", $width, $value, $clamped);
    };
}
