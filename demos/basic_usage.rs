use nvector::{vector, Product};

fn main() -> anyhow::Result<()> {
    println!("📐 N-dimensional Vector Demo");
    println!("============================\n");

    let a = vector![1, 2, 3]?;
    let b = vector![4, 5, 6]?;
    println!("a = {}", a);
    println!("b = {}", b);

    // Arithmetic
    println!("\n➕ Arithmetic");
    println!("  a + b     = {}", a.try_add(&b)?);
    println!("  a - b     = {}", a.try_sub(&b)?);
    println!("  a + 10    = {}", a.try_add(10)?);
    println!("  a + [7]   = {}", a.try_add(&vector![7]?)?);
    if let Product::Scalar(dot) = a.try_mul(&b)? {
        println!("  a · b     = {}", dot);
    }
    println!("  a / 2     = {}", a.try_div(2.0)?);
    println!("  |a|       = {:.4}", a.magnitude());

    match a.try_add(&vector![1, 2]?) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  a + [1, 2] fails: {}", e),
    }

    // Geometry
    println!("\n📏 Geometry");
    println!("  â         = {}", a.normalize()?);
    println!("  ∠(a, b)   = {:.4} rad", a.angle_with(&b)?);
    println!("  a × b     = {}", a.cross_product(&b)?);
    println!("  proj_b a  = {}", a.projection(&b)?);
    println!("  a ⟂ b     = {}", a.orthogonal(&b)?);
    println!("  triangle  = {:.4}", a.triangular_area_with(&b)?);
    println!("  a ∥ 2a    = {}", a.is_parallel_with(&a.scale(2.0))?);
    println!(
        "  x ⟂ y     = {}",
        vector![1, 0, 0]?.is_orthogonal_to(&vector![0, 1, 0]?)?
    );

    match vector![0, 0, 0]?.normalize() {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  normalizing zero fails: {}", e),
    }

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
