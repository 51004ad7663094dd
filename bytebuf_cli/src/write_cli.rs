use std::path::Path;
use clap::ArgMatches;
use log::info;
use bytebuf_lib::buffer::SharedBuffer;
use bytebuf_lib::error::Result;
use bytebuf_lib::view::DataView;
use crate::field::Field;
use crate::file_io::store_buffer;
use crate::required_number;

pub fn set_main(view: &mut DataView, path: &Path, matches: &ArgMatches) -> Result<()> {
    let field: Field = matches.value_of("width").unwrap_or_default().parse()?;
    let index: usize = required_number(matches, "index")?;
    let value: i64 = required_number(matches, "value")?;
    write_field(view, field, index, value)?;
    store_buffer(path, &view.buffer().borrow())?;
    info!("wrote {} at {} of {} to {}", field, index, view, path.display());
    Ok(())
}

/// bits are set for every non zero value, integers are clamped by the view
pub fn write_field(view: &mut DataView, field: Field, index: usize, value: i64) -> Result<()> {
    match field {
        Field::Bit => view.set_bit(index, value != 0),
        Field::Uint(width) => view.set_uint(width, index, value),
    }
}

pub fn resize_main(buffer: &SharedBuffer, path: &Path, matches: &ArgMatches) -> Result<()> {
    let size: usize = required_number(matches, "size")?;
    buffer.borrow_mut().resize(size);
    store_buffer(path, &buffer.borrow())?;
    info!("resized {} to {} bytes", path.display(), size);
    Ok(())
}
