use crossfilm_core::models::CurveParams;
use crossfilm_core::CrossCurves;

/// Print the red, green and blue tables for the given parameters.
///
/// Plain output is one row per input value; `--json` prints the tables as
/// three 256-element arrays.
pub fn cmd_curves(midpoint: f64, factor: f64, json: bool) -> Result<(), String> {
    let params = CurveParams::new(midpoint, factor);
    params.validate().map_err(|e| e.to_string())?;
    let curves = CrossCurves::from_params(&params);

    if json {
        let out = serde_json::to_string_pretty(&curves)
            .map_err(|e| format!("Failed to serialize curves: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    println!("# midpoint={} factor={}", midpoint, factor);
    println!("{:>5} {:>5} {:>5} {:>5}", "in", "red", "green", "blue");
    for value in 0..=255u8 {
        let [r, g, b] = curves.map_rgb(value, value, value);
        println!("{:>5} {:>5} {:>5} {:>5}", value, r, g, b);
    }
    Ok(())
}
