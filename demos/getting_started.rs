use geohash_int::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see region enumeration logs)
    env_logger::init();

    println!("=== geohash-int - Getting Started ===\n");

    // === ENCODING ===
    println!("1. Encoding and Decoding");
    println!("------------------------");

    let (lat, lng) = (40.7128, -74.0060);
    let hash = encode(lat, lng, MAX_BIT_DEPTH)?;
    println!("   New York at {} bits: {}", MAX_BIT_DEPTH, hash);

    let point = decode(hash, MAX_BIT_DEPTH)?;
    println!(
        "   Decoded: ({:.6}, {:.6}) +/- ({:.2e}, {:.2e})",
        point.lat, point.lng, point.lat_err, point.lng_err
    );

    let bbox = decode_bbox(hash, MAX_BIT_DEPTH)?;
    println!(
        "   Cell: [{:.6}, {:.6}] x [{:.6}, {:.6}]\n",
        bbox.min_lat, bbox.max_lat, bbox.min_lng, bbox.max_lng
    );

    // === NEIGHBORS ===
    println!("2. Neighbors");
    println!("------------");

    let hasher = Geohasher::new(32)?;
    let cell = hasher.encode(lat, lng)?;
    for (bearing, value) in Bearing::ALL.iter().zip(hasher.neighbors(cell)?) {
        println!("   {:?}: {}", bearing, value);
    }
    println!();

    // === REGIONS ===
    println!("3. Region Covering");
    println!("------------------");

    let cells = hasher.bboxes(40.70, -74.02, 40.72, -74.00)?;
    println!("   {} cells cover lower Manhattan at 32 bits\n", cells.len());

    // === PRECISION ===
    println!("4. Choosing a Precision");
    println!("-----------------------");

    let radius = 500.0;
    let drop_bits = find_bit_depth(radius);
    let depth = MAX_BIT_DEPTH - drop_bits;
    println!(
        "   A {}m radius fits a {}-bit cell; shift a {}-bit hash right by {}",
        radius, depth, MAX_BIT_DEPTH, drop_bits
    );
    println!(
        "   Coarse hash: {} (aligned back: {})",
        hash >> drop_bits,
        shift(hash >> drop_bits, depth)?
    );

    Ok(())
}
