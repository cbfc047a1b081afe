use crate::Bit;

#[test]
fn replicate() {
    assert_eq!(Bit::Zero.replicate(), 0x00);
    assert_eq!(Bit::One.replicate(), 0xFF);
}

#[test]
fn conversions() {
    assert_eq!(Bit::from(true), Bit::One);
    assert_eq!(Bit::from(false), Bit::Zero);
    assert!(bool::from(Bit::One));
    assert_eq!(Bit::from(0u8), Bit::Zero);
    assert_eq!(Bit::from(0x80u8), Bit::One);
    assert_eq!(u64::from(Bit::One), 1);
    assert_eq!(Bit::of_byte(0b0100_0000, 6), Bit::One);
    assert_eq!(Bit::of_byte(0b0100_0000, 7), Bit::Zero);
}

#[test]
fn display_bit() {
    assert_eq!(format!("{}", Bit::Zero), "0");
    assert_eq!(format!("{}", Bit::One), "1");
}
