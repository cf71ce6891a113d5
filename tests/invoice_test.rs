use factura_fixture::{invoice, Error};

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    find_bytes(haystack, needle).is_some()
}

fn generate_in_tempdir() -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(invoice::DEFAULT_OUTPUT);
    invoice::generate(&path).unwrap();
    std::fs::read(&path).unwrap()
}

#[test]
fn output_file_is_a_nonempty_pdf() {
    let bytes = generate_in_tempdir();
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-1.7\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn single_letter_page() {
    let bytes = generate_in_tempdir();
    assert!(contains_bytes(&bytes, b"/Count 1"));
    assert!(contains_bytes(&bytes, b"/MediaBox [0 0 612.0 792.0]"));
}

#[test]
fn all_fixed_strings_present() {
    let bytes = generate_in_tempdir();
    // É and the accented vowels come out as WinAnsi octal escapes.
    assert!(contains_bytes(&bytes, b"(FACTURA M\\311DICA) Tj"));
    assert!(contains_bytes(&bytes, b"(Fecha: 26/10/2023) Tj"));
    assert!(contains_bytes(&bytes, b"(Proveedor: Cl\\355nica San Jos\\351) Tj"));
    assert!(contains_bytes(&bytes, b"(Descripci\\363n: Consulta m\\351dica general) Tj"));
    assert!(contains_bytes(&bytes, b"(Monto: 75.50 \\200) Tj"));
    assert!(contains_bytes(&bytes, b"(Esta es una factura de prueba para testing) Tj"));
}

#[test]
fn fonts_match_the_plan() {
    let bytes = generate_in_tempdir();
    // Title: bold 16. Body: regular 12. Footer: regular 10.
    assert!(contains_bytes(&bytes, b"/F2 16 Tf"));
    assert!(contains_bytes(&bytes, b"/F1 12 Tf"));
    assert!(contains_bytes(&bytes, b"/F1 10 Tf"));
    assert!(contains_bytes(&bytes, b"/BaseFont /Helvetica-Bold"));
    assert!(contains_bytes(&bytes, b"/BaseFont /Helvetica"));
}

#[test]
fn lines_drawn_in_plan_order() {
    let bytes = generate_in_tempdir();
    let title = find_bytes(&bytes, b"(FACTURA M").unwrap();
    let fecha = find_bytes(&bytes, b"(Fecha:").unwrap();
    let monto = find_bytes(&bytes, b"(Monto:").unwrap();
    let footer = find_bytes(&bytes, b"(Esta es una factura").unwrap();
    assert!(title < fecha);
    assert!(fecha < monto);
    assert!(monto < footer);
}

#[test]
fn coordinates_match_the_plan() {
    let bytes = generate_in_tempdir();
    // y offsets measured down from the top of the 792pt page.
    assert!(contains_bytes(&bytes, b"100 692 Td")); // título
    assert!(contains_bytes(&bytes, b"100 642 Td")); // fecha
    assert!(contains_bytes(&bytes, b"100 612 Td")); // proveedor
    assert!(contains_bytes(&bytes, b"100 582 Td")); // descripción
    assert!(contains_bytes(&bytes, b"100 552 Td")); // monto
    assert!(contains_bytes(&bytes, b"100 100 Td")); // pie de página
}

#[test]
fn info_entries_present() {
    let bytes = generate_in_tempdir();
    assert!(contains_bytes(&bytes, b"(Factura de prueba)"));
    assert!(contains_bytes(&bytes, b"(factura-fixture)"));
}

#[test]
fn rerun_overwrites_and_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(invoice::DEFAULT_OUTPUT);

    std::fs::write(&path, b"not a pdf").unwrap();
    invoice::generate(&path).unwrap();
    let first = std::fs::read(&path).unwrap();
    assert!(first.starts_with(b"%PDF-1.7\n"));

    invoice::generate(&path).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unwritable_target_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join(invoice::DEFAULT_OUTPUT);
    let err = invoice::generate(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn binary_prints_filename_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_factura-fixture"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("test_factura.pdf"));

    let bytes = std::fs::read(dir.path().join("test_factura.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7\n"));
}

#[test]
fn binary_exits_nonzero_when_target_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    // A directory squatting on the output path makes the file
    // creation fail even when running as root.
    std::fs::create_dir(dir.path().join("test_factura.pdf")).unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_factura-fixture"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
