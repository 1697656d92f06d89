// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for memory map entries.

use kestrel_addr::PhysAddr;

use super::flags::MappingFlags;
use super::region::{MemRegion, MemRegionFlags};

#[test]
fn region_flags_drop_allocator_bits() {
    let region = MemRegionFlags::READ | MemRegionFlags::WRITE | MemRegionFlags::FREE;
    assert_eq!(MappingFlags::from(region), MappingFlags::RW);

    let mmio = MemRegionFlags::READ
        | MemRegionFlags::WRITE
        | MemRegionFlags::DEVICE
        | MemRegionFlags::RESERVED;
    assert_eq!(
        MappingFlags::from(mmio),
        MappingFlags::RW | MappingFlags::DEVICE
    );
    assert_eq!(
        MappingFlags::from(MemRegionFlags::UNCACHED | MemRegionFlags::EXECUTE),
        MappingFlags::EXECUTE | MappingFlags::UNCACHED
    );
}

#[test]
fn region_contains() {
    let region = MemRegion::new(
        PhysAddr::new(0x4000_0000),
        0x1000,
        MemRegionFlags::READ | MemRegionFlags::FREE,
        "ram",
    );
    assert!(region.contains(PhysAddr::new(0x4000_0000)));
    assert!(region.contains(PhysAddr::new(0x4000_0fff)));
    assert!(!region.contains(PhysAddr::new(0x4000_1000)));
    assert!(!region.contains(PhysAddr::new(0x3fff_ffff)));
    assert_eq!(region.end(), Some(PhysAddr::new(0x4000_1000)));
}

#[test]
fn region_end_overflow() {
    let region = MemRegion::new(PhysAddr::new(usize::MAX), 2, MemRegionFlags::READ, "top");
    assert_eq!(region.end(), None);
    assert!(region.contains(PhysAddr::new(usize::MAX)));
}

#[test]
fn region_is_free() {
    let free = MemRegion::new(PhysAddr::new(0), 0x1000, MemRegionFlags::FREE, "free");
    let reserved = MemRegion::new(
        PhysAddr::new(0),
        0x1000,
        MemRegionFlags::FREE | MemRegionFlags::RESERVED,
        "kernel",
    );
    assert!(free.is_free());
    assert!(!reserved.is_free());
    assert_eq!(reserved.mapping_flags(), MappingFlags::empty());
}
