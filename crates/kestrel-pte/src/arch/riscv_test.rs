// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the riscv encoding.

use kestrel_addr::PhysAddr;

use super::ArchFlags;
use super::riscv::{PTEFlags, Rv64Pte};
use crate::flags::MappingFlags;
use crate::pte::GenericPte;

#[test]
fn data_encoding() {
    assert_eq!(
        PTEFlags::to_native(MappingFlags::RW),
        PTEFlags::V | PTEFlags::R | PTEFlags::W
    );
    assert_eq!(
        PTEFlags::to_native(MappingFlags::RX | MappingFlags::USER | MappingFlags::GLOBAL),
        PTEFlags::V | PTEFlags::R | PTEFlags::X | PTEFlags::U | PTEFlags::G
    );
}

#[test]
fn write_without_read_is_not_valid() {
    let native = PTEFlags::to_native(MappingFlags::WRITE);
    assert_eq!(native, PTEFlags::W);
    assert_eq!(PTEFlags::from_native(native), MappingFlags::WRITE);

    let wx = MappingFlags::WRITE | MappingFlags::EXECUTE;
    let native = PTEFlags::to_native(wx);
    assert_eq!(native, PTEFlags::W | PTEFlags::X);
    assert!(!native.is_leaf());
    assert_eq!(PTEFlags::from_native(native), wx);
}

#[test]
fn no_permission_is_not_valid() {
    let flags = MappingFlags::USER | MappingFlags::GLOBAL;
    let native = PTEFlags::to_native(flags);
    assert_eq!(native, PTEFlags::U | PTEFlags::G);
    assert!(!native.is_present());
    assert_eq!(PTEFlags::from_native(native), flags);
}

#[test]
fn execute_only() {
    let flags = MappingFlags::EXECUTE | MappingFlags::USER;
    assert_eq!(PTEFlags::from_native(PTEFlags::to_native(flags)), flags);
}

#[test]
fn memory_type_dropped() {
    let flags = MappingFlags::RW | MappingFlags::DEVICE | MappingFlags::UNCACHED;
    assert_eq!(
        PTEFlags::to_native(flags),
        PTEFlags::V | PTEFlags::R | PTEFlags::W
    );
    assert_eq!(PTEFlags::to_native(MappingFlags::DEVICE), PTEFlags::empty());
}

#[test]
fn status_bits() {
    let flags = MappingFlags::RW | MappingFlags::ACCESSED | MappingFlags::DIRTY;
    let native = PTEFlags::to_native(flags);
    assert!(native.contains(PTEFlags::A | PTEFlags::D));
    assert_eq!(PTEFlags::from_native(native), flags);
}

#[test]
fn leaf_encodings() {
    assert!(PTEFlags::R.is_leaf());
    assert!(PTEFlags::X.is_leaf());
    assert!((PTEFlags::R | PTEFlags::W | PTEFlags::X).is_leaf());
    assert!(!PTEFlags::W.is_leaf());
    assert!(!(PTEFlags::W | PTEFlags::X).is_leaf());
    assert!(!(PTEFlags::U | PTEFlags::G).is_leaf());
}

#[test]
fn next_level_pointer_decodes_empty() {
    assert_eq!(PTEFlags::from_native(PTEFlags::V), MappingFlags::empty());
}

#[test]
fn rsw_ignored() {
    let native = PTEFlags::V | PTEFlags::R | PTEFlags::RSW;
    assert_eq!(PTEFlags::from_native(native), MappingFlags::READ);
}

#[test]
fn pte_ppn_layout() {
    let pte = Rv64Pte::new_page(PhysAddr::new(0x8020_0000), MappingFlags::RW, false);
    assert_eq!(pte.bits(), (0x80200 << 10) | 0b111);
    assert_eq!(pte.paddr(), PhysAddr::new(0x8020_0000));
    assert_eq!(pte.flags(), MappingFlags::RW);
    assert!(pte.is_present());
}

#[test]
fn pte_table_is_not_leaf() {
    let table = Rv64Pte::new_table(PhysAddr::new(0x8030_0000));
    assert_eq!(table.bits(), (0x80300 << 10) | 0b1);
    assert!(table.is_present());
    assert!(!table.is_huge());
    assert_eq!(table.flags(), MappingFlags::empty());

    let leaf = Rv64Pte::new_page(PhysAddr::new(0x8040_0000), MappingFlags::RX, true);
    assert!(leaf.is_huge());
}

#[test]
fn set_paddr_keeps_flags() {
    let mut pte = Rv64Pte::new_page(PhysAddr::new(0x8000_0000), MappingFlags::RX, false);
    pte.set_paddr(PhysAddr::new(0x8765_4000));
    assert_eq!(pte.paddr(), PhysAddr::new(0x8765_4000));
    assert_eq!(pte.flags(), MappingFlags::RX);
    pte.clear();
    assert!(pte.is_unused());
    assert!(!pte.is_present());
}
