use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Inserts `-{index}` before the extension of the file name, mimicking how imagemagick
/// names the outputs when one output file is given for several images.
/// If no extension is present, appends to the end.
pub fn with_index_suffix(path: &Path, index: usize) -> PathBuf {
    let suffix = format!("-{index}");
    let Some(file_name) = path.file_name() else {
        let mut result = path.as_os_str().to_owned();
        result.push(&suffix);
        return result.into();
    };

    let file_name = Path::new(file_name);
    let mut new_name = OsString::new();
    match (file_name.file_stem(), file_name.extension()) {
        (Some(stem), Some(extension)) => {
            new_name.push(stem);
            new_name.push(&suffix);
            new_name.push(".");
            new_name.push(extension);
        }
        _ => {
            new_name.push(file_name);
            new_name.push(&suffix);
        }
    }
    path.with_file_name(new_name)
}
