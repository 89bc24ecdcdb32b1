use pyo3_stub_gen::Result;

fn main() -> Result<()> {
    numeric_interop::logging::init_logging(None);
    let stub = numeric_interop::python::stub_info()?;
    stub.generate()?;
    tracing::info!("wrote numeric_interop type stubs");
    Ok(())
}
