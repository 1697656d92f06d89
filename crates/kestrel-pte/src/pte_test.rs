// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests shared by every page-table-entry implementation.

use kestrel_addr::PhysAddr;
use proptest::prelude::*;

use super::arch::aarch64::A64Pte;
use super::arch::riscv::Rv64Pte;
use super::arch::x86_64::X64Pte;
use super::flags::MappingFlags;
use super::pte::GenericPte;

fn check_lifecycle<P: GenericPte>() {
    let paddr = PhysAddr::new(0x8000_3000);
    let mut pte = P::new_page(paddr, MappingFlags::RW, false);
    assert!(!pte.is_unused());
    assert!(pte.is_present());
    assert_eq!(pte.paddr(), paddr);
    assert_eq!(pte.flags(), MappingFlags::RW);

    pte.set_flags(MappingFlags::RX, false);
    assert_eq!(pte.paddr(), paddr);
    assert_eq!(pte.flags(), MappingFlags::RX);

    let moved = PhysAddr::new(0x9000_0000);
    pte.set_paddr(moved);
    assert_eq!(pte.paddr(), moved);
    assert_eq!(pte.flags(), MappingFlags::RX);

    pte.clear();
    assert!(pte.is_unused());
    assert!(!pte.is_present());
    assert_eq!(pte.bits(), 0);
    assert_eq!(pte.flags(), MappingFlags::empty());
}

fn check_unreadable_page_is_not_present<P: GenericPte>() {
    let flags = MappingFlags::WRITE | MappingFlags::USER;
    let pte = P::new_page(PhysAddr::new(0x1000), flags, false);
    assert!(!pte.is_present());
    assert!(!pte.is_unused());
    assert_eq!(pte.paddr(), PhysAddr::new(0x1000));
    assert_eq!(pte.flags(), flags);
}

fn check_address_survives_flags<P: GenericPte>(frame: usize, flags: MappingFlags) {
    let paddr = PhysAddr::new(frame << 12);
    let pte = P::new_page(paddr, flags, false);
    assert_eq!(pte.paddr(), paddr);
    assert!(pte.flags().is_subset_of(flags));
}

#[test]
fn x64_lifecycle() {
    check_lifecycle::<X64Pte>();
    check_unreadable_page_is_not_present::<X64Pte>();
}

#[test]
fn a64_lifecycle() {
    check_lifecycle::<A64Pte>();
    check_unreadable_page_is_not_present::<A64Pte>();
}

#[test]
fn rv64_lifecycle() {
    check_lifecycle::<Rv64Pte>();
    check_unreadable_page_is_not_present::<Rv64Pte>();
}

#[test]
fn default_is_unused() {
    assert!(X64Pte::default().is_unused());
    assert!(A64Pte::default().is_unused());
    assert!(Rv64Pte::default().is_unused());
}

#[test]
fn debug_shows_address() {
    let pte = X64Pte::new_page(PhysAddr::new(0x5000), MappingFlags::RO, false);
    let text = format!("{pte:?}");
    assert!(text.contains("PhysAddr(0x5000)"), "{text}");
}

proptest! {
    // 36-bit frame numbers fit every architecture's address field.
    #[test]
    fn entry_packing_preserves_address(
        frame in 0usize..(1 << 36),
        raw_flags in any::<usize>(),
    ) {
        let flags = MappingFlags::from_bits_truncate(raw_flags);
        check_address_survives_flags::<X64Pte>(frame, flags);
        check_address_survives_flags::<A64Pte>(frame, flags);
        check_address_survives_flags::<Rv64Pte>(frame, flags);
    }
}
