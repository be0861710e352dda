use bmp_brush::{
    err_new, err_new_image,
    error::{Kind, Result},
    prelude::{debug_print, read_json},
    Script,
};
use std::{path::PathBuf, time::Instant};

fn main() -> Result<()> {
    let t = Instant::now();
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let (Some(script_file), Some(output)) = (args.next(), args.next()) else {
        return Err(err_new!(
            Kind::Other,
            "usage: bmp_brush <script.json> <output.png>"
        ));
    };

    let script: Script = read_json(&script_file)?;
    debug_print(&script);

    let bitmap = script.render()?;
    bitmap
        .to_rgb_image()
        .save(&output)
        .map_err(|e| err_new_image!(e))?;

    println!("{} successed, cost {} ms", output.display(), t.elapsed().as_millis());
    Ok(())
}
