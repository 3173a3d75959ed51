//! i386 (32-bit legacy) syscall number table.
//!
//! Sparse `(number, id)` pairs derived from the well-known, stable
//! `arch/x86/entry/syscalls/syscall_32.tbl` numbering. Syscalls that only
//! ever existed on x86_64/x32 (e.g. `newfstatat`, `arch_prctl`) are
//! intentionally absent here, which is the correct, tested outcome for
//! `inverse(personality, id)` on this ABI.

use super::syscall_id::SyscallId;

pub const SLOTS: &[(u32, SyscallId)] = &[
    (0, SyscallId::RestartSyscall),
    (1, SyscallId::Exit),
    (2, SyscallId::Fork),
    (3, SyscallId::Read),
    (4, SyscallId::Write),
    (5, SyscallId::Open),
    (6, SyscallId::Close),
    (7, SyscallId::Waitpid),
    (8, SyscallId::Creat),
    (9, SyscallId::Link),
    (10, SyscallId::Unlink),
    (11, SyscallId::Execve),
    (12, SyscallId::Chdir),
    (13, SyscallId::Time),
    (14, SyscallId::Mknod),
    (15, SyscallId::Chmod),
    (16, SyscallId::Lchown),
    (18, SyscallId::Oldstat),
    (19, SyscallId::Lseek),
    (20, SyscallId::Getpid),
    (21, SyscallId::Mount),
    (23, SyscallId::Setuid),
    (24, SyscallId::Getuid),
    (26, SyscallId::Ptrace),
    (27, SyscallId::Alarm),
    (28, SyscallId::Oldfstat),
    (29, SyscallId::Pause),
    (30, SyscallId::Utime),
    (33, SyscallId::Access),
    (36, SyscallId::Sync),
    (37, SyscallId::Kill),
    (38, SyscallId::Rename),
    (39, SyscallId::Mkdir),
    (40, SyscallId::Rmdir),
    (41, SyscallId::Dup),
    (42, SyscallId::Pipe),
    (43, SyscallId::Times),
    (45, SyscallId::Brk),
    (46, SyscallId::Setgid),
    (47, SyscallId::Getgid),
    (49, SyscallId::Geteuid),
    (50, SyscallId::Getegid),
    (51, SyscallId::Acct),
    (52, SyscallId::Umount2),
    (54, SyscallId::Ioctl),
    (55, SyscallId::Fcntl),
    (57, SyscallId::Setpgid),
    (60, SyscallId::Umask),
    (61, SyscallId::Chroot),
    (62, SyscallId::Ustat),
    (63, SyscallId::Dup2),
    (64, SyscallId::Getppid),
    (65, SyscallId::Getpgrp),
    (66, SyscallId::Setsid),
    (70, SyscallId::Setreuid),
    (71, SyscallId::Setregid),
    (74, SyscallId::Sethostname),
    (75, SyscallId::Setrlimit),
    (76, SyscallId::Getrlimit),
    (77, SyscallId::Getrusage),
    (78, SyscallId::Gettimeofday),
    (79, SyscallId::Settimeofday),
    (80, SyscallId::Getgroups),
    (81, SyscallId::Setgroups),
    (82, SyscallId::Select),
    (83, SyscallId::Symlink),
    (84, SyscallId::Oldlstat),
    (85, SyscallId::Readlink),
    (86, SyscallId::Uselib),
    (87, SyscallId::Swapon),
    (88, SyscallId::Reboot),
    (90, SyscallId::Mmap),
    (91, SyscallId::Munmap),
    (92, SyscallId::Truncate),
    (93, SyscallId::Ftruncate),
    (94, SyscallId::Fchmod),
    (95, SyscallId::Fchown),
    (96, SyscallId::Getpriority),
    (97, SyscallId::Setpriority),
    (99, SyscallId::Statfs),
    (100, SyscallId::Fstatfs),
    (101, SyscallId::Ioperm),
    (103, SyscallId::Syslog),
    (104, SyscallId::Setitimer),
    (105, SyscallId::Getitimer),
    (106, SyscallId::Stat),
    (107, SyscallId::Lstat),
    (108, SyscallId::Fstat),
    (110, SyscallId::Iopl),
    (111, SyscallId::Vhangup),
    (114, SyscallId::Wait4),
    (115, SyscallId::Swapoff),
    (116, SyscallId::Sysinfo),
    (118, SyscallId::Fsync),
    (120, SyscallId::Clone),
    (121, SyscallId::Setdomainname),
    (122, SyscallId::Uname),
    (123, SyscallId::ModifyLdt),
    (124, SyscallId::Adjtimex),
    (125, SyscallId::Mprotect),
    (128, SyscallId::InitModule),
    (129, SyscallId::DeleteModule),
    (131, SyscallId::Quotactl),
    (132, SyscallId::Getpgid),
    (133, SyscallId::Fchdir),
    (135, SyscallId::Sysfs),
    (136, SyscallId::Personality),
    (138, SyscallId::Setfsuid),
    (139, SyscallId::Setfsgid),
    (141, SyscallId::Getdents),
    (143, SyscallId::Flock),
    (144, SyscallId::Msync),
    (145, SyscallId::Readv),
    (146, SyscallId::Writev),
    (147, SyscallId::Getsid),
    (148, SyscallId::Fdatasync),
    (150, SyscallId::Mlock),
    (151, SyscallId::Munlock),
    (152, SyscallId::Mlockall),
    (153, SyscallId::Munlockall),
    (154, SyscallId::SchedSetparam),
    (155, SyscallId::SchedGetparam),
    (156, SyscallId::SchedSetscheduler),
    (157, SyscallId::SchedGetscheduler),
    (158, SyscallId::SchedYield),
    (159, SyscallId::SchedGetPriorityMax),
    (160, SyscallId::SchedGetPriorityMin),
    (161, SyscallId::SchedRrGetInterval),
    (162, SyscallId::Nanosleep),
    (163, SyscallId::Mremap),
    (164, SyscallId::Setresuid),
    (165, SyscallId::Getresuid),
    (168, SyscallId::Poll),
    (170, SyscallId::Setresgid),
    (171, SyscallId::Getresgid),
    (172, SyscallId::Prctl),
    (173, SyscallId::RtSigreturn),
    (174, SyscallId::RtSigaction),
    (175, SyscallId::RtSigprocmask),
    (176, SyscallId::RtSigpending),
    (177, SyscallId::RtSigtimedwait),
    (178, SyscallId::RtSigqueueinfo),
    (179, SyscallId::RtSigsuspend),
    (180, SyscallId::Pread64),
    (181, SyscallId::Pwrite64),
    (182, SyscallId::Chown),
    (183, SyscallId::Getcwd),
    (184, SyscallId::Capget),
    (185, SyscallId::Capset),
    (186, SyscallId::Sigaltstack),
    (187, SyscallId::Sendfile),
    (190, SyscallId::Vfork),
    (192, SyscallId::Mmap2),
    (195, SyscallId::Stat64),
    (196, SyscallId::Lstat64),
    (197, SyscallId::Fstat64),
    (217, SyscallId::PivotRoot),
    (218, SyscallId::Mincore),
    (219, SyscallId::Madvise),
    (220, SyscallId::Getdents64),
    (224, SyscallId::Gettid),
    (225, SyscallId::Readahead),
    (226, SyscallId::Setxattr),
    (227, SyscallId::Lsetxattr),
    (228, SyscallId::Fsetxattr),
    (229, SyscallId::Getxattr),
    (230, SyscallId::Lgetxattr),
    (231, SyscallId::Fgetxattr),
    (232, SyscallId::Listxattr),
    (233, SyscallId::Llistxattr),
    (234, SyscallId::Flistxattr),
    (235, SyscallId::Removexattr),
    (236, SyscallId::Lremovexattr),
    (237, SyscallId::Fremovexattr),
    (238, SyscallId::Tkill),
    (240, SyscallId::Futex),
    (241, SyscallId::SchedSetaffinity),
    (242, SyscallId::SchedGetaffinity),
    (245, SyscallId::IoSetup),
    (246, SyscallId::IoDestroy),
    (247, SyscallId::IoGetevents),
    (248, SyscallId::IoSubmit),
    (249, SyscallId::IoCancel),
    (250, SyscallId::Fadvise64),
    (252, SyscallId::ExitGroup),
    (253, SyscallId::LookupDcookie),
    (254, SyscallId::EpollCreate),
    (255, SyscallId::EpollCtl),
    (256, SyscallId::EpollWait),
    (257, SyscallId::RemapFilePages),
    (258, SyscallId::SetTidAddress),
    (259, SyscallId::TimerCreate),
    (260, SyscallId::TimerSettime),
    (261, SyscallId::TimerGettime),
    (262, SyscallId::TimerGetoverrun),
    (263, SyscallId::TimerDelete),
    (264, SyscallId::ClockSettime),
    (265, SyscallId::ClockGettime),
    (266, SyscallId::ClockGetres),
    (267, SyscallId::ClockNanosleep),
    (270, SyscallId::Tgkill),
    (271, SyscallId::Utimes),
    (274, SyscallId::Mbind),
    (275, SyscallId::GetMempolicy),
    (276, SyscallId::SetMempolicy),
    (277, SyscallId::MqOpen),
    (278, SyscallId::MqUnlink),
    (279, SyscallId::MqTimedsend),
    (280, SyscallId::MqTimedreceive),
    (281, SyscallId::MqNotify),
    (282, SyscallId::MqGetsetattr),
    (283, SyscallId::KexecLoad),
    (284, SyscallId::Waitid),
    (286, SyscallId::AddKey),
    (287, SyscallId::RequestKey),
    (288, SyscallId::Keyctl),
    (289, SyscallId::IoprioSet),
    (290, SyscallId::IoprioGet),
    (291, SyscallId::InotifyInit),
    (292, SyscallId::InotifyAddWatch),
    (293, SyscallId::InotifyRmWatch),
    (294, SyscallId::MigratePages),
    (295, SyscallId::Openat),
    (296, SyscallId::Mkdirat),
    (297, SyscallId::Mknodat),
    (298, SyscallId::Fchownat),
    (299, SyscallId::Futimesat),
    (300, SyscallId::Fstatat64),
    (301, SyscallId::Unlinkat),
    (302, SyscallId::Renameat),
    (303, SyscallId::Linkat),
    (304, SyscallId::Symlinkat),
    (305, SyscallId::Readlinkat),
    (306, SyscallId::Fchmodat),
    (307, SyscallId::Faccessat),
    (308, SyscallId::Pselect6),
    (309, SyscallId::Ppoll),
    (310, SyscallId::Unshare),
    (311, SyscallId::SetRobustList),
    (312, SyscallId::GetRobustList),
    (313, SyscallId::Splice),
    (314, SyscallId::SyncFileRange),
    (315, SyscallId::Tee),
    (316, SyscallId::Vmsplice),
    (317, SyscallId::MovePages),
    (318, SyscallId::Getcpu),
    (319, SyscallId::EpollPwait),
    (320, SyscallId::Utimensat),
    (321, SyscallId::Signalfd),
    (322, SyscallId::TimerfdCreate),
    (323, SyscallId::Eventfd),
    (324, SyscallId::Fallocate),
    (325, SyscallId::TimerfdSettime),
    (326, SyscallId::TimerfdGettime),
    (328, SyscallId::Eventfd2),
    (329, SyscallId::EpollCreate1),
    (330, SyscallId::Dup3),
    (331, SyscallId::Pipe2),
    (332, SyscallId::InotifyInit1),
    (333, SyscallId::Preadv),
    (334, SyscallId::Pwritev),
    (335, SyscallId::RtTgsigqueueinfo),
    (336, SyscallId::PerfEventOpen),
    (337, SyscallId::Recvmmsg),
    (338, SyscallId::FanotifyInit),
    (339, SyscallId::FanotifyMark),
    (340, SyscallId::Prlimit64),
    (341, SyscallId::NameToHandleAt),
    (342, SyscallId::OpenByHandleAt),
    (343, SyscallId::ClockAdjtime),
    (344, SyscallId::Syncfs),
    (345, SyscallId::Sendmmsg),
    (346, SyscallId::Setns),
    (347, SyscallId::ProcessVmReadv),
    (348, SyscallId::ProcessVmWritev),
    (349, SyscallId::Kcmp),
    (350, SyscallId::FinitModule),
    (351, SyscallId::SchedSetattr),
    (352, SyscallId::SchedGetattr),
    (353, SyscallId::Renameat2),
    (354, SyscallId::Seccomp),
    (355, SyscallId::Getrandom),
    (356, SyscallId::MemfdCreate),
    (357, SyscallId::Bpf),
    (358, SyscallId::Execveat),
    (359, SyscallId::Socket),
    (360, SyscallId::Socketpair),
    (361, SyscallId::Bind),
    (362, SyscallId::Connect),
    (363, SyscallId::Listen),
    (364, SyscallId::Accept4),
    (365, SyscallId::Getsockopt),
    (366, SyscallId::Setsockopt),
    (367, SyscallId::Getsockname),
    (368, SyscallId::Getpeername),
    (369, SyscallId::Sendto),
    (370, SyscallId::Sendmsg),
    (371, SyscallId::Recvfrom),
    (372, SyscallId::Recvmsg),
    (373, SyscallId::Shutdown),
    (374, SyscallId::Userfaultfd),
    (375, SyscallId::Membarrier),
    (376, SyscallId::Mlock2),
    (377, SyscallId::CopyFileRange),
    (378, SyscallId::Preadv2),
    (379, SyscallId::Pwritev2),
    (380, SyscallId::PkeyMprotect),
    (381, SyscallId::PkeyAlloc),
    (382, SyscallId::PkeyFree),
    (383, SyscallId::Statx),
];
